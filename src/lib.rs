/// Internal-docs QA assistant Lambdas.
///
/// This crate implements a two-Lambda architecture for the policy document
/// assistant:
/// 1. A retrieval Lambda serving the Bedrock agent's document action group
///    (policy keyword lookup and naive substring search over S3 objects)
/// 2. A query Lambda that relays chat queries to the Bedrock agent and
///    reassembles the streamed reply for the web chat widget
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - S3 as the read-only policy document store
/// - Bedrock Agent Runtime for conversational answers
/// - Tokio for async runtime
// Module declarations
pub mod agent;
pub mod core;
pub mod errors;
pub mod query;
pub mod retrieval;
pub mod store;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each
/// Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
