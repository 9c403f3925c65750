use serde::{Deserialize, Serialize};

/// Inbound action-group call from the Bedrock agent platform.
///
/// The platform is not under our control, so every field defaults to empty
/// rather than failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionRequest {
    pub action_group: String,
    pub function: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl ActionRequest {
    /// Returns the value of the first parameter with the given name, in the
    /// order the platform sent them.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Inbound chat request parsed from the HTTP proxy body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatQueryRequest {
    pub query: String,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Action-group response envelope.
///
/// Every path through the retrieval handler produces this exact shape so the
/// calling platform can always parse it uniformly.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub response: FunctionResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub action_group: String,
    pub function: String,
    pub function_response: FunctionResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub response_body: ResponseBody,
}

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Serialize)]
pub struct TextBody {
    pub body: String,
}

impl ActionResponse {
    /// Builds the uniform text envelope for the given action-group call.
    #[must_use]
    pub fn text(action_group: &str, function: &str, body: impl Into<String>) -> Self {
        Self {
            response: FunctionResult {
                action_group: action_group.to_string(),
                function: function.to_string(),
                function_response: FunctionResponse {
                    response_body: ResponseBody {
                        text: TextBody { body: body.into() },
                    },
                },
            },
        }
    }
}
