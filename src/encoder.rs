// src/encoder.rs
use base64::{Engine as _, engine::general_purpose};

use crate::models::{
    ChatMessage, ContentPart, ImageSubmission, ImageUrl, MessageContent, ModelRequest,
    ProblemSubmission, Role,
};

/// Persona and formatting rules sent ahead of every problem.
pub const SYSTEM_PROMPT: &str = r#"You are a mathematics assistant that solves problems.
Carefully analyse the math problem in the image or in the text, solve it step by step,
and give a detailed explanation of the solution.
Always show every intermediate step and the final answer.

Use LaTeX for all mathematical expressions, wrapping formulas in double dollars: $$...$$
For formulas on their own line use \[ ... \]
For formulas inline with the text use \( ... \)

Examples:
1. "Simplify the fraction $$\frac{a^2 + 2ab + b^2}{a + b} = \frac{(a+b)^2}{a+b} = a + b$$"
2. "\[ P = \frac{1}{4} + \frac{1}{2} + 1 = \frac{1}{4} + \frac{2}{4} + \frac{4}{4} = \frac{7}{4} \]"

You handle algebra, geometry, trigonometry, calculus and statistics.
If the image does not contain a math problem, say so.
Answer clearly and in a structured way, in Russian."#;

/// Instruction paired with an image when the caller did not write one.
pub const DEFAULT_IMAGE_INSTRUCTION: &str =
    "Please solve the math problem in this image and explain the solution step by step.";

/// Builds a `data:` URI for the given bytes.
pub fn data_url(content_type: &str, data: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(data)
    )
}

/// Turns a validated submission into the message list sent to the model.
pub fn encode(submission: &ProblemSubmission) -> ModelRequest {
    let user_content = match submission {
        ProblemSubmission::Image(image) => image_content(image),
        ProblemSubmission::Text(text) => MessageContent::Text(text.text.clone()),
    };

    ModelRequest {
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: Role::User,
                content: user_content,
            },
        ],
    }
}

fn image_content(image: &ImageSubmission) -> MessageContent {
    let instruction = image
        .instruction
        .clone()
        .unwrap_or_else(|| DEFAULT_IMAGE_INSTRUCTION.to_string());

    MessageContent::Parts(vec![
        ContentPart::Text { text: instruction },
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: data_url(&image.content_type, &image.data),
            },
        },
    ])
}
