pub mod instructions;
pub mod known;
pub mod parse;
pub mod types;

pub use instructions::{RESPONDER_INSTRUCTION, SELECTOR_INSTRUCTION};
pub use known::KnownTechnique;
pub use parse::{fallback_selection, parse_selection, DEFAULT_TECHNIQUE};
pub use types::TechniqueResult;
