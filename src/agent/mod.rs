//! Agent-invocation collaborator and streamed-reply assembly

pub mod bedrock;

// Re-export the main type for convenience
pub use bedrock::BedrockAgentInvoker;

use async_trait::async_trait;

use crate::errors::DomainError;

/// One fragment of a streamed agent reply, in delivery order.
///
/// Fragments may arrive without a payload; those carry no text.
#[derive(Debug, Clone, Default)]
pub struct ReplyFragment {
    pub bytes: Option<Vec<u8>>,
}

/// Forwards a query to the conversational agent and collects the streamed
/// reply fragments in arrival order.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke(
        &self,
        session_id: &str,
        input_text: &str,
    ) -> Result<Vec<ReplyFragment>, DomainError>;
}

/// Concatenates streamed reply fragments into a single string.
///
/// Payloads are appended in delivery order with no separators; fragments
/// without a payload are skipped. A payload that is not valid UTF-8 is an
/// error.
pub fn assemble_reply(fragments: &[ReplyFragment]) -> Result<String, DomainError> {
    let mut reply = String::new();
    for fragment in fragments {
        let Some(bytes) = fragment.bytes.as_deref() else {
            continue;
        };
        reply.push_str(std::str::from_utf8(bytes)?);
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str) -> ReplyFragment {
        ReplyFragment {
            bytes: Some(text.as_bytes().to_vec()),
        }
    }

    #[test]
    fn assembles_fragments_in_delivery_order() {
        let fragments = vec![fragment("Hel"), fragment("lo, "), fragment("world")];
        assert_eq!(assemble_reply(&fragments).unwrap(), "Hello, world");
    }

    #[test]
    fn skips_fragments_without_payload() {
        let fragments = vec![
            fragment("Hel"),
            ReplyFragment { bytes: None },
            fragment("lo"),
        ];
        assert_eq!(assemble_reply(&fragments).unwrap(), "Hello");
    }

    #[test]
    fn empty_stream_assembles_to_empty_string() {
        assert_eq!(assemble_reply(&[]).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_payload_is_an_error() {
        let fragments = vec![ReplyFragment {
            bytes: Some(vec![0xff, 0xfe]),
        }];
        assert!(matches!(
            assemble_reply(&fragments),
            Err(DomainError::Decode(_))
        ));
    }
}
