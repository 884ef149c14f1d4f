use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
    pub duration: String,
}

/// One user's plan for a single calendar day. Regenerating replaces the
/// whole plan for that day.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub schedule: Vec<ScheduleItem>,
    pub preferences: Vec<String>,
    pub goals: String,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub user_id: Option<String>,
    pub preferences: Option<Vec<String>>,
    pub goals: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateScheduleResponse {
    pub success: bool,
    pub message: String,
    pub schedule: DayPlan,
}

#[derive(Debug, Serialize)]
pub struct ScheduleLookupResponse {
    pub success: bool,
    pub schedule: Option<DayPlan>,
}
