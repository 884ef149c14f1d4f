use crate::models::schedule::ScheduleItem;

const MORNING: [(&str, &str, &str); 3] = [
    ("7:00 AM", "Morning meditation", "10 min"),
    ("7:30 AM", "Exercise/Walk", "30 min"),
    ("8:30 AM", "Healthy breakfast", "30 min"),
];

const WORK: [(&str, &str, &str); 4] = [
    ("9:00 AM", "Priority task #1", "90 min"),
    ("10:30 AM", "Short break", "15 min"),
    ("12:00 PM", "Lunch break", "45 min"),
    ("1:00 PM", "Priority task #2", "90 min"),
];

const EVENING: [(&str, &str, &str); 4] = [
    ("6:00 PM", "Relaxation time", "30 min"),
    ("7:00 PM", "Dinner", "45 min"),
    ("9:00 PM", "Journal writing", "15 min"),
    ("10:00 PM", "Wind down routine", "30 min"),
];

fn extend_from(schedule: &mut Vec<ScheduleItem>, block: &[(&str, &str, &str)]) {
    schedule.extend(block.iter().map(|&(time, activity, duration)| ScheduleItem {
        time: time.into(),
        activity: activity.into(),
        duration: duration.into(),
    }));
}

/// Assemble a day plan from the fixed category templates. Blocks are
/// concatenated in morning → work → evening order no matter how the
/// preferences are ordered; with no recognized tag the result is
/// morning + evening.
///
/// `goals` is stored with the plan and echoed back to the client but does
/// not alter selection.
pub fn build_schedule(preferences: &[String], _goals: &str) -> Vec<ScheduleItem> {
    let has = |tag: &str| preferences.iter().any(|p| p == tag);

    let mut schedule = Vec::new();
    if has("morning") {
        extend_from(&mut schedule, &MORNING);
    }
    if has("work") || has("productivity") {
        extend_from(&mut schedule, &WORK);
    }
    if has("evening") || has("relaxation") {
        extend_from(&mut schedule, &EVENING);
    }

    if schedule.is_empty() {
        extend_from(&mut schedule, &MORNING);
        extend_from(&mut schedule, &EVENING);
    }
    schedule
}
