use crate::prelude::{eprintln, *};
use clap::Parser;
use playground_core::chat::{
    CompletionSettings, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

mod ask;
mod completion;
mod error;
mod pipeline;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Let an LLM pick a prompting technique for your prompt, rewrite it, and answer it"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// API key for the completion service
    #[clap(long, env = "GROQ_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[clap(long, env = "GROQ_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model used for both the technique selection and the answer
    #[clap(long, env = "PLAYGROUND_MODEL", global = true, default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[clap(long, env = "PLAYGROUND_TEMPERATURE", global = true, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,

    /// Maximum number of tokens per completion
    #[clap(long, env = "PLAYGROUND_MAX_TOKENS", global = true, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Whether to display additional information.
    #[clap(long, env = "PLAYGROUND_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        }
    }

    fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Pick a technique for a prompt, rewrite the prompt, and answer it
    Ask(crate::ask::App),

    /// Serve the playground form over HTTP
    Serve(crate::serve::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    env_logger::init();
    color_eyre::install()?;

    if let Err(err) = dotenv {
        if !err.not_found() {
            log::warn!("Failed to load .env file: {err}");
        }
    }

    let app = App::parse();

    if !app.global.has_api_key() {
        eprintln!("Warning: GROQ_API_KEY environment variable is not set");
    }

    match app.command {
        SubCommands::Ask(sub_app) => crate::ask::run(sub_app, app.global).await,
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
