pub mod identify;

use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Shazam Clone API is running"
    }))
}

pub async fn test_endpoint() -> Json<Value> {
    Json(json!({
        "message": "Test endpoint working"
    }))
}
