//! Mistral chat completion API wire format types
//!
//! Field documentation follows <https://docs.mistral.ai/api/#tag/chat>.
//! Documented numeric ranges are advisory: the codec passes out-of-range
//! values through unchanged, matching the upstream API's own behavior.

use aiwire_codec::{WireDecode, WireEncode};
use serde::{Deserialize, Serialize};

/// Mistral chat completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// The prompt(s) to generate completions for
    pub messages: Vec<Message>,
    /// ID of the model to use
    pub model: String,
    /// Penalizes repetition of words based on their frequency in the
    /// generated text. Range [-2, 2], default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    /// Maximum number of tokens to generate. Prompt tokens plus
    /// `max_tokens` cannot exceed the model's context length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Number of completions to return per request; input tokens are only
    /// billed once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    /// Penalizes repetition of words or phrases regardless of frequency.
    /// Range [-2, 2], default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// Format the model must produce its output in. JSON mode additionally
    /// requires instructing the model to produce JSON via a system or user
    /// message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    /// Whether to inject a safety prompt before all conversations.
    /// Default: false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_prompt: Option<bool>,
    /// Seed for random sampling; set for deterministic results across calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Stop generation when one of these tokens is detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Whether to stream back partial progress.
    /// Default: false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// Sampling temperature, recommended between 0.0 and 0.7. Range [0, 1];
    /// the default varies by model. Alter this or `top_p`, not both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold: only tokens within the top `top_p`
    /// probability mass are considered. Range [0, 1], default 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl WireEncode for ChatCompletionRequest {}
impl WireDecode for ChatCompletionRequest {}

impl ChatCompletionRequest {
    /// Request with only the required fields set
    pub fn new(messages: Vec<Message>, model: impl Into<String>) -> Self {
        Self {
            messages,
            model: model.into(),
            frequency_penalty: None,
            max_tokens: None,
            n: None,
            presence_penalty: None,
            response_format: None,
            safe_prompt: None,
            seed: None,
            stop: None,
            stream: None,
            temperature: None,
            top_p: None,
        }
    }
}

/// Chat message, discriminated by the `role` wire field
///
/// Every alternative flattens to `{"role": …, "content": …}` in one object;
/// there is no wrapper around the variant payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    /// A prior model response
    Assistant {
        /// Message text
        content: String,
    },
    /// A system instruction
    System {
        /// Message text
        content: String,
    },
    /// An end-user message
    User {
        /// Message text
        content: String,
    },
}

/// Output format the model must produce, discriminated by the `type` wire
/// field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// JSON mode: the generated message is guaranteed to be valid JSON
    JsonObject,
    /// Plain text output
    Text,
}

/// Mistral chat completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response identifier
    pub id: String,
    /// Object type
    pub object: String,
    /// Creation timestamp (unix seconds)
    pub created: u64,
    /// Model that produced the completion
    pub model: String,
    /// Generated choices
    pub choices: Vec<Choice>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl WireDecode for ChatCompletionResponse {}

/// Choice within a chat completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice index
    pub index: u32,
    /// Generated message
    pub message: ResponseMessage,
    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message within a response choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Role (always "assistant")
    pub role: String,
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Token usage in a chat completion response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}
