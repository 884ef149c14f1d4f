use axum::Json;
use chrono::{Datelike, Local};
use serde_json::{json, Value};

use crate::services;

pub async fn daily_quote() -> Json<Value> {
    let quote = services::quotes::pick_daily_quote(Local::now().day());

    Json(json!({
        "success": true,
        "quote": quote,
    }))
}
