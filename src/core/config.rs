use std::env;

/// Support helpline surfaced in user-facing failure messages.
pub const SUPPORT_HELPLINE: &str = "8500";

/// Support email surfaced in user-facing failure messages.
pub const SUPPORT_EMAIL: &str = "company.ac.in.com";

#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    pub bucket: String,
}

impl RetrievalConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bucket: env::var("POLICY_DOCS_BUCKET")
                .map_err(|e| format!("POLICY_DOCS_BUCKET: {}", e))?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub agent_id: String,
    pub agent_alias_id: String,
}

impl QueryConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            agent_id: env::var("BEDROCK_AGENT_ID")
                .map_err(|e| format!("BEDROCK_AGENT_ID: {}", e))?,
            agent_alias_id: env::var("BEDROCK_AGENT_ALIAS_ID")
                .map_err(|e| format!("BEDROCK_AGENT_ALIAS_ID: {}", e))?,
        })
    }
}
