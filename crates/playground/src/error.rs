#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Completion API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),
}
