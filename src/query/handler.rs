//! Lambda handler for the chat query relay.
//!
//! This module handles:
//! - Request body parsing and session-id synthesis
//! - Agent invocation and streamed-reply assembly
//! - The canned fallback on any agent failure
//!
//! Agent failures never surface as a 5xx: the caller is an end-user-facing
//! chat widget, so it always receives a readable 200 body. The one non-200
//! response is the 400 for an empty query, which bypasses the agent
//! entirely.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{FALLBACK_MESSAGE, helpers};
use crate::agent::{AgentInvoker, assemble_reply};
use crate::core::models::ChatQueryRequest;
use crate::errors::DomainError;

pub use self::function_handler as handler;

/// Lambda handler for the query entrypoint.
///
/// # Errors
///
/// Never returns an error toward the platform; agent failures degrade to the
/// canned fallback with status 200.
pub async fn function_handler(
    event: LambdaEvent<Value>,
    agent: &dyn AgentInvoker,
) -> Result<Value, Error> {
    let request = parse_request(&event.payload);
    let session_id = request.session_id.clone().unwrap_or_else(new_session_id);

    if request.query.is_empty() {
        return Ok(helpers::bad_request("Query is required"));
    }

    match relay_query(agent, &request.query, &session_id).await {
        Ok(reply) => {
            info!("User query: {}", request.query);
            info!("Agent response: {reply}");
            Ok(helpers::ok_chat(&reply, &session_id))
        }
        Err(e) => {
            error!("Error processing query: {e}");
            Ok(helpers::ok_chat(FALLBACK_MESSAGE, &session_id))
        }
    }
}

/// Invokes the agent and reassembles the streamed reply into one string.
async fn relay_query(
    agent: &dyn AgentInvoker,
    query: &str,
    session_id: &str,
) -> Result<String, DomainError> {
    let fragments = agent.invoke(session_id, query).await?;
    assemble_reply(&fragments)
}

/// Parses the proxy request body; malformed or absent bodies degrade to the
/// default request, which then takes the empty-query path.
fn parse_request(payload: &Value) -> ChatQueryRequest {
    payload
        .get("body")
        .and_then(Value::as_str)
        .and_then(|body| serde_json::from_str(body).ok())
        .unwrap_or_default()
}

fn new_session_id() -> String {
    format!("session-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_request_reads_query_and_session() {
        let payload = json!({
            "body": json!({ "query": "vacation days", "sessionId": "session-1" }).to_string(),
        });
        let request = parse_request(&payload);
        assert_eq!(request.query, "vacation days");
        assert_eq!(request.session_id.as_deref(), Some("session-1"));
    }

    #[test]
    fn parse_request_defaults_on_malformed_body() {
        let payload = json!({ "body": "not json" });
        let request = parse_request(&payload);
        assert!(request.query.is_empty());
        assert!(request.session_id.is_none());
    }

    #[test]
    fn parse_request_defaults_on_missing_body() {
        let request = parse_request(&json!({}));
        assert!(request.query.is_empty());
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
        assert!(new_session_id().starts_with("session-"));
    }
}
