use crate::completion::{CompletionService, GroqClient};
use crate::prelude::*;
use playground_core::chat::{build_response_request, build_selection_request, CompletionSettings};
use playground_core::pipeline::{error_response, is_blank_prompt, CompletionResult, DisplayOutput};
use playground_core::technique::{fallback_selection, parse_selection, TechniqueResult};
use std::sync::Arc;

/// The two-call pipeline: select a technique, then answer the transformed prompt.
///
/// Every failure is absorbed into a usable result, so none of these methods can
/// fail. The service is injected so the CLI, the HTTP form and the tests share
/// the same code.
pub struct Playground {
    service: Arc<dyn CompletionService>,
    settings: CompletionSettings,
}

impl Playground {
    pub fn new(service: Arc<dyn CompletionService>, settings: CompletionSettings) -> Self {
        Self { service, settings }
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let client = GroqClient::from_global(global)?;
        Ok(Self::new(Arc::new(client), global.completion_settings()))
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Ask the model for a technique and a rewritten prompt.
    ///
    /// Falls back to `("Zero-Shot", prompt)` when the call fails.
    pub async fn select_technique(&self, prompt: &str) -> TechniqueResult {
        let request = build_selection_request(&self.settings, prompt);

        match self.service.complete(&request).await {
            Ok(reply) => {
                let selection = parse_selection(&reply, prompt);
                log::info!("Selected technique: {}", selection.technique);
                selection
            }
            Err(err) => {
                log::error!("Technique selection failed: {err}");
                fallback_selection(prompt)
            }
        }
    }

    /// Answer the transformed prompt. A failed call becomes an `"Error: ..."` answer.
    pub async fn generate_response(&self, transformed_prompt: &str) -> String {
        let request = build_response_request(&self.settings, transformed_prompt);

        match self.service.complete(&request).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Response generation failed: {err}");
                error_response(err)
            }
        }
    }

    /// Both calls, one after the other.
    pub async fn complete(&self, prompt: &str) -> CompletionResult {
        let selection = self.select_technique(prompt).await;
        let response = self.generate_response(&selection.transformed_prompt).await;

        CompletionResult {
            response,
            selection,
        }
    }

    /// What the user sees for `prompt`. Blank prompts never reach the service.
    pub async fn respond(&self, prompt: &str) -> DisplayOutput {
        if is_blank_prompt(prompt) {
            log::debug!("Blank prompt, skipping completion calls");
            return DisplayOutput::placeholder();
        }

        DisplayOutput::from_result(self.complete(prompt).await)
    }
}
