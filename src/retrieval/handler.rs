//! Lambda handler for the document-retrieval action group.
//!
//! This module handles:
//! - Dispatch on the incoming `function` name
//! - Policy keyword lookup against the catalog
//! - Naive substring search across the searchable documents
//!
//! Every path returns the same envelope; store failures become readable text
//! in the response body, never a handler error toward the platform.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::catalog::PolicyCatalog;
use crate::core::config::{SUPPORT_EMAIL, SUPPORT_HELPLINE};
use crate::core::models::{ActionRequest, ActionResponse};
use crate::store::DocumentStore;

pub use self::function_handler as handler;

/// Maximum search-snippet length in characters.
const SNIPPET_MAX_CHARS: usize = 500;

/// Lambda handler for the retrieval entrypoint.
///
/// Routes the action-group call to the named function and always answers
/// with the uniform text envelope.
///
/// # Errors
///
/// Never returns an error toward the platform; failures are reported as
/// readable text in the envelope body.
pub async fn function_handler(
    event: LambdaEvent<Value>,
    store: &dyn DocumentStore,
    catalog: &PolicyCatalog,
) -> Result<ActionResponse, Error> {
    let request: ActionRequest = serde_json::from_value(event.payload).unwrap_or_default();
    info!(
        action_group = %request.action_group,
        function = %request.function,
        "Received action group request"
    );

    let body = match request.function.as_str() {
        "get_policy_document" => get_policy_document(store, catalog, &request).await,
        "search_policies" => search_policies(store, catalog, &request).await,
        _ => "Function not found".to_string(),
    };

    Ok(ActionResponse::text(
        &request.action_group,
        &request.function,
        body,
    ))
}

/// Resolves a `policy_type` parameter to a stored document and returns its
/// full content.
pub async fn get_policy_document(
    store: &dyn DocumentStore,
    catalog: &PolicyCatalog,
    request: &ActionRequest,
) -> String {
    let Some(policy_type) = request.parameter("policy_type") else {
        return format!(
            "Please specify the policy type ({})",
            catalog.available_types()
        );
    };

    let Some(entry) = catalog.resolve(policy_type) else {
        return format!(
            "Policy type not found. Available types: {}",
            catalog.available_types()
        );
    };

    match store.fetch_document(&entry.object_key).await {
        Ok(content) => format!("Retrieved {policy_type} policy document:\n\n{content}"),
        Err(e) => {
            error!("Error retrieving policy document: {e}");
            format!("Error retrieving policy document: {e}")
        }
    }
}

/// Scans the searchable documents for a case-insensitive substring match and
/// returns annotated snippets in fixed catalog order.
pub async fn search_policies(
    store: &dyn DocumentStore,
    catalog: &PolicyCatalog,
    request: &ActionRequest,
) -> String {
    let Some(query) = request.parameter("query") else {
        return "Please provide a search query".to_string();
    };

    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for entry in catalog.searchable() {
        let content = match store.fetch_document(&entry.object_key).await {
            Ok(content) => content,
            Err(e) => {
                // Unavailable documents are skipped, not fatal to the search.
                warn!("Could not search in {}: {e}", entry.object_key);
                continue;
            }
        };

        if content.to_lowercase().contains(&needle) {
            results.push(format!(
                "Found in {}:\n{}...",
                entry.object_key,
                snippet(&content, SNIPPET_MAX_CHARS)
            ));
        }
    }

    if results.is_empty() {
        format!(
            "No results found for '{query}'. Please contact support at \
             {SUPPORT_HELPLINE} or {SUPPORT_EMAIL}"
        )
    } else {
        format!("Search results for '{query}':\n\n{}", results.join("\n\n"))
    }
}

/// Returns at most `max_chars` characters of `content`, cut on a char
/// boundary.
fn snippet(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
