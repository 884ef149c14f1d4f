use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: String,
    pub mood: i32,
    pub gratitude: String,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
}

/// All fields optional so a missing field surfaces as a validation error
/// instead of an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryRequest {
    pub user_id: Option<String>,
    pub content: Option<String>,
    pub mood: Option<i32>,
    pub gratitude: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalEntryResponse {
    pub success: bool,
    pub message: String,
    pub entry: JournalEntry,
}

#[derive(Debug, Serialize)]
pub struct JournalListResponse {
    pub success: bool,
    pub entries: BTreeMap<NaiveDate, JournalEntry>,
}
