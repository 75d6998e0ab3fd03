// src/models.rs
use serde::Serialize;

/// An uploaded image that passed validation.
#[derive(Debug, Clone)]
pub struct ImageSubmission {
    pub content_type: String,
    pub data: Vec<u8>,
    pub instruction: Option<String>,
}

/// A typed-in problem that passed validation.
#[derive(Debug, Clone)]
pub struct TextSubmission {
    pub text: String,
}

/// A validated problem, decided once at the HTTP boundary.
#[derive(Debug, Clone)]
pub enum ProblemSubmission {
    Image(ImageSubmission),
    Text(TextSubmission),
}

/// Chat request in the shape the completion API expects.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

/// What the pipeline hands back when the model answered.
#[derive(Serialize, Debug, Clone)]
pub struct SolutionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub solution: String,
}

/// Body of every failed response.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorResult {
    pub error: String,
}
