use rand::Rng;

use crate::models::support::{BreathingExercise, StressLevel, SupportResponse};

pub const POSITIVE_MESSAGES: [&str; 3] = [
    "It's wonderful that you're feeling good! Keep nurturing those positive feelings.",
    "Great to hear you're in a good space. Remember to celebrate these moments!",
    "Your positive energy is beautiful. Consider sharing it with others around you.",
];

pub const NEUTRAL_MESSAGES: [&str; 3] = [
    "Neutral days are completely normal. Sometimes being steady is its own strength.",
    "It's okay to feel in-between. Take this time to check in with yourself.",
    "Balanced feelings can be peaceful. What small thing might bring you joy today?",
];

pub const NEGATIVE_MESSAGES: [&str; 3] = [
    "I hear that you're struggling right now. Your feelings are valid and you're not alone.",
    "Difficult emotions are part of the human experience. Be gentle with yourself.",
    "Thank you for being honest about how you feel. That takes courage.",
];

const HIGH_STRESS_ADVICE: &str =
    "High stress can be overwhelming. Consider trying a breathing exercise or taking a short walk.";
const MEDIUM_STRESS_ADVICE: &str =
    "Moderate stress is manageable. What's one small thing you can do to care for yourself?";
const LOW_STRESS_ADVICE: &str = "It's great that your stress levels are manageable today.";

pub const SUPPORT_RECOMMENDATIONS: [&str; 5] = [
    "Consider talking to a trusted friend or family member",
    "Try a 5-minute breathing exercise",
    "Take a short walk outside",
    "Write in your journal",
    "Listen to calming music",
];

pub const STEADY_RECOMMENDATIONS: [&str; 3] = [
    "Keep doing what you're doing!",
    "Remember to stay hydrated",
    "Take breaks when needed",
];

const EXERCISES: [BreathingExercise; 3] = [
    BreathingExercise {
        name: "4-7-8 Breathing",
        description: "Inhale for 4 counts, hold for 7 counts, exhale for 8 counts",
        duration: "2-3 minutes",
        steps: &[
            "Sit comfortably and close your eyes",
            "Inhale through your nose for 4 counts",
            "Hold your breath for 7 counts",
            "Exhale through your mouth for 8 counts",
            "Repeat 3-4 times",
        ],
    },
    BreathingExercise {
        name: "Box Breathing",
        description: "Equal counts for inhale, hold, exhale, hold",
        duration: "3-5 minutes",
        steps: &[
            "Inhale for 4 counts",
            "Hold for 4 counts",
            "Exhale for 4 counts",
            "Hold for 4 counts",
            "Repeat the cycle",
        ],
    },
    BreathingExercise {
        name: "Belly Breathing",
        description: "Deep diaphragmatic breathing",
        duration: "5-10 minutes",
        steps: &[
            "Place one hand on chest, one on belly",
            "Breathe slowly through your nose",
            "Feel your belly rise more than your chest",
            "Exhale slowly through pursed lips",
            "Continue for several minutes",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBucket {
    Positive,
    Neutral,
    Negative,
}

/// Mood 7-10 reads as positive, 1-4 as negative, 5-6 as neutral.
pub fn bucket_mood(mood: i32) -> MoodBucket {
    if mood >= 7 {
        MoodBucket::Positive
    } else if mood <= 4 {
        MoodBucket::Negative
    } else {
        MoodBucket::Neutral
    }
}

/// Build a check-in reply: one uniformly-picked message from the mood
/// bucket, stress advice by level, and a recommendation list chosen only
/// by the `needs_support` flag.
pub fn build_support_response(
    mood: i32,
    stress_level: StressLevel,
    needs_support: bool,
    rng: &mut impl Rng,
) -> SupportResponse {
    let messages = match bucket_mood(mood) {
        MoodBucket::Positive => &POSITIVE_MESSAGES,
        MoodBucket::Neutral => &NEUTRAL_MESSAGES,
        MoodBucket::Negative => &NEGATIVE_MESSAGES,
    };
    let message = messages[rng.gen_range(0..messages.len())];

    let stress_advice = match stress_level {
        StressLevel::High => HIGH_STRESS_ADVICE,
        StressLevel::Medium => MEDIUM_STRESS_ADVICE,
        StressLevel::Low => LOW_STRESS_ADVICE,
    };

    let recommendations: &'static [&'static str] = if needs_support {
        &SUPPORT_RECOMMENDATIONS
    } else {
        &STEADY_RECOMMENDATIONS
    };

    SupportResponse {
        message,
        stress_advice,
        recommendations,
    }
}

pub fn pick_breathing_exercise(rng: &mut impl Rng) -> BreathingExercise {
    EXERCISES[rng.gen_range(0..EXERCISES.len())]
}
