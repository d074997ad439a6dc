use serde::{Deserialize, Serialize};

/// The technique chosen for a prompt and the prompt rewritten with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueResult {
    /// Technique label as reported by the model. Never empty.
    pub technique: String,
    /// The rewritten prompt that gets executed. Never empty.
    pub transformed_prompt: String,
}
