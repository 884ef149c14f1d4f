use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, Utc};

use crate::error::{AppError, AppResult};
use crate::handlers::require_user_id;
use crate::models::support::{
    BreathingExerciseResponse, CheckIn, CheckInHistoryResponse, CheckInRequest, CheckInResponse,
    StressLevel,
};
use crate::services;
use crate::AppState;

pub async fn check_in(
    State(state): State<AppState>,
    Json(body): Json<CheckInRequest>,
) -> AppResult<Json<CheckInResponse>> {
    let user_id = require_user_id(body.user_id)?;

    let mood = body
        .mood
        .ok_or_else(|| AppError::Validation("mood is required".into()))?;
    if !(1..=10).contains(&mood) {
        return Err(AppError::Validation("Mood must be between 1 and 10".into()));
    }

    let stress_level = body
        .stress_level
        .as_deref()
        .map(StressLevel::parse_lossy)
        .unwrap_or(StressLevel::Medium);
    let needs_support = body.needs_support.unwrap_or(false);

    let response = {
        let mut rng = state.rng.lock().await;
        services::support::build_support_response(mood, stress_level, needs_support, &mut *rng)
    };

    state
        .store
        .append_check_in(
            &user_id,
            CheckIn {
                mood,
                stress_level,
                needs_support,
                timestamp: Utc::now(),
                date: Local::now().date_naive(),
            },
        )
        .await;

    tracing::debug!(user_id = %user_id, mood = mood, "Check-in recorded");

    Ok(Json(CheckInResponse {
        success: true,
        response,
    }))
}

pub async fn list_check_ins(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<CheckInHistoryResponse>> {
    let check_ins = state.store.list_check_ins(&user_id).await;

    Ok(Json(CheckInHistoryResponse {
        success: true,
        check_ins,
    }))
}

pub async fn breathing_exercise(
    State(state): State<AppState>,
) -> AppResult<Json<BreathingExerciseResponse>> {
    let exercise = {
        let mut rng = state.rng.lock().await;
        services::support::pick_breathing_exercise(&mut *rng)
    };

    Ok(Json(BreathingExerciseResponse {
        success: true,
        exercise,
    }))
}
