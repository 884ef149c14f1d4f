use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, Utc};

use crate::error::AppResult;
use crate::handlers::require_user_id;
use crate::models::schedule::{
    CreateScheduleRequest, CreateScheduleResponse, DayPlan, ScheduleLookupResponse,
};
use crate::services;
use crate::AppState;

pub async fn create_schedule(
    State(state): State<AppState>,
    Json(body): Json<CreateScheduleRequest>,
) -> AppResult<Json<CreateScheduleResponse>> {
    let user_id = require_user_id(body.user_id)?;
    let preferences = body.preferences.unwrap_or_default();
    let goals = body.goals.unwrap_or_default();

    let schedule = services::schedule::build_schedule(&preferences, &goals);

    let plan = DayPlan {
        schedule,
        preferences,
        goals,
        date: Local::now().date_naive(),
        timestamp: Utc::now(),
    };
    let plan = state.store.save_schedule(&user_id, plan).await;

    tracing::debug!(user_id = %user_id, items = plan.schedule.len(), "Schedule created");

    Ok(Json(CreateScheduleResponse {
        success: true,
        message: "Schedule created successfully".into(),
        schedule: plan,
    }))
}

/// Today's plan, or null if the user has not generated one yet.
pub async fn today_schedule(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ScheduleLookupResponse>> {
    let today = Local::now().date_naive();
    let schedule = state.store.get_schedule(&user_id, today).await;

    Ok(Json(ScheduleLookupResponse {
        success: true,
        schedule,
    }))
}
