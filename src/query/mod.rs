//! Query relay: forwards chat queries to the Bedrock agent and relays the
//! streamed answer over the HTTP proxy integration

pub mod handler;
pub mod helpers;

// Re-export the main handler for convenience
pub use handler::handler;

/// Canned reply shown to users when the agent call fails for any reason.
pub const FALLBACK_MESSAGE: &str = "I'm sorry, I couldn't process your query at the moment. \
     Please contact our support team:\n\n\
     📞 Company Helpline: 8500\n\
     📧 Email: company.ac.in.com";
