use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    /// Unrecognized labels fall back to `Medium`.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// A single emotional self-report, appended to the user's history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub mood: i32,
    pub stress_level: StressLevel,
    pub needs_support: bool,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub user_id: Option<String>,
    pub mood: Option<i32>,
    /// Free-form on the wire; unknown values default to medium.
    pub stress_level: Option<String>,
    pub needs_support: Option<bool>,
}

/// Generated check-in reply. All text comes from fixed template tables,
/// so the fields borrow 'static data.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResponse {
    pub message: &'static str,
    pub stress_advice: &'static str,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreathingExercise {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub success: bool,
    pub response: SupportResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInHistoryResponse {
    pub success: bool,
    pub check_ins: Vec<CheckIn>,
}

#[derive(Debug, Serialize)]
pub struct BreathingExerciseResponse {
    pub success: bool,
    pub exercise: BreathingExercise,
}
