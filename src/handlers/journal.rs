use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, Utc};

use crate::error::{AppError, AppResult};
use crate::handlers::require_user_id;
use crate::models::journal::{
    JournalEntry, JournalEntryRequest, JournalEntryResponse, JournalListResponse,
};
use crate::AppState;

pub async fn submit_entry(
    State(state): State<AppState>,
    Json(body): Json<JournalEntryRequest>,
) -> AppResult<Json<JournalEntryResponse>> {
    let user_id = require_user_id(body.user_id)?;

    let content = body
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Validation("content is required".into()))?;

    let mood = body
        .mood
        .ok_or_else(|| AppError::Validation("mood is required".into()))?;
    if !(1..=5).contains(&mood) {
        return Err(AppError::Validation("Mood must be between 1 and 5".into()));
    }

    let entry = JournalEntry {
        content,
        mood,
        gratitude: body.gratitude.unwrap_or_default(),
        timestamp: Utc::now(),
        date: Local::now().date_naive(),
    };
    let entry = state.store.save_journal_entry(&user_id, entry).await;

    tracing::debug!(user_id = %user_id, date = %entry.date, "Journal entry saved");

    Ok(Json(JournalEntryResponse {
        success: true,
        message: "Journal entry saved successfully".into(),
        entry,
    }))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<JournalListResponse>> {
    let entries = state.store.list_journal_entries(&user_id).await;

    Ok(Json(JournalListResponse {
        success: true,
        entries,
    }))
}
