//! Response builders for the query relay's HTTP proxy responses.
//!
//! Every response carries the same CORS headers so the chat widget can call
//! the endpoint from any origin.

use chrono::Utc;
use serde_json::{Value, json};

fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Content-Type",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
    })
}

/// Returns a 200 OK proxy response carrying the chat reply body.
#[must_use]
pub fn ok_chat(response: &str, session_id: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": json!({
            "response": response,
            "sessionId": session_id,
            "timestamp": Utc::now().to_rfc3339(),
        })
        .to_string(),
    })
}

/// Returns a 400 proxy response with an error body.
#[must_use]
pub fn bad_request(message: &str) -> Value {
    json!({
        "statusCode": 400,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string(),
    })
}
