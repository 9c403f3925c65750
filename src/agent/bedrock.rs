//! Bedrock Agent Runtime implementation of the agent invoker

use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::Client;
use aws_sdk_bedrockagentruntime::primitives::Blob;
use aws_sdk_bedrockagentruntime::types::ResponseStream;
use tracing::debug;

use super::{AgentInvoker, ReplyFragment};
use crate::errors::DomainError;

/// Invokes a configured Bedrock agent and drains its completion stream.
pub struct BedrockAgentInvoker {
    client: Client,
    agent_id: String,
    agent_alias_id: String,
}

impl BedrockAgentInvoker {
    #[must_use]
    pub fn new(client: Client, agent_id: String, agent_alias_id: String) -> Self {
        Self {
            client,
            agent_id,
            agent_alias_id,
        }
    }
}

#[async_trait]
impl AgentInvoker for BedrockAgentInvoker {
    async fn invoke(
        &self,
        session_id: &str,
        input_text: &str,
    ) -> Result<Vec<ReplyFragment>, DomainError> {
        let output = self
            .client
            .invoke_agent()
            .agent_id(&self.agent_id)
            .agent_alias_id(&self.agent_alias_id)
            .session_id(session_id)
            .input_text(input_text)
            .send()
            .await
            .map_err(|e| DomainError::Agent(e.to_string()))?;

        let mut completion = output.completion;
        let mut fragments = Vec::new();

        while let Some(event) = completion
            .recv()
            .await
            .map_err(|e| DomainError::Agent(e.to_string()))?
        {
            match event {
                ResponseStream::Chunk(part) => fragments.push(ReplyFragment {
                    bytes: part.bytes.map(Blob::into_inner),
                }),
                other => debug!(?other, "Ignoring non-chunk agent stream event"),
            }
        }

        Ok(fragments)
    }
}
