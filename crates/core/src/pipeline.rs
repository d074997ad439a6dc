//! Results of a playground run and how they are shown to the user.

use serde::Serialize;

use crate::technique::{KnownTechnique, TechniqueResult};

pub const EMPTY_PROMPT_RESPONSE: &str = "Please enter a prompt";
pub const EMPTY_PROMPT_TECHNIQUE: &str = "No technique selected";
pub const EMPTY_PROMPT_TRANSFORMED: &str = "No transformed prompt";

/// Whether a prompt should be answered with placeholders instead of a model call.
///
/// Only the empty string qualifies; whitespace is passed on to the model as typed.
pub fn is_blank_prompt(prompt: &str) -> bool {
    prompt.is_empty()
}

/// Inline answer used when the response call fails.
pub fn error_response(message: impl std::fmt::Display) -> String {
    format!("Error: {message}")
}

/// Final answer together with the selection that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub response: String,
    pub selection: TechniqueResult,
}

impl CompletionResult {
    /// `(response, technique, transformed_prompt)`
    pub fn into_parts(self) -> (String, String, String) {
        (
            self.response,
            self.selection.technique,
            self.selection.transformed_prompt,
        )
    }
}

/// The three outputs of the playground, ready to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOutput {
    pub technique: String,
    pub transformed_prompt: String,
    pub response: String,
    pub known_technique: Option<KnownTechnique>,
}

impl DisplayOutput {
    /// Outputs shown for an empty prompt.
    pub fn placeholder() -> Self {
        Self {
            technique: EMPTY_PROMPT_TECHNIQUE.to_string(),
            transformed_prompt: EMPTY_PROMPT_TRANSFORMED.to_string(),
            response: EMPTY_PROMPT_RESPONSE.to_string(),
            known_technique: None,
        }
    }

    pub fn from_result(result: CompletionResult) -> Self {
        let known_technique = KnownTechnique::recognize(&result.selection.technique);
        let (response, technique, transformed_prompt) = result.into_parts();

        Self {
            technique: format_technique(&technique),
            transformed_prompt,
            response,
            known_technique,
        }
    }
}

/// Technique label as shown next to a completed run.
pub fn format_technique(technique: &str) -> String {
    format!("Using technique: {technique}")
}
