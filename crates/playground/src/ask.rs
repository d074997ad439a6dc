use crate::pipeline::Playground;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use playground_core::pipeline::DisplayOutput;
use tokio::io::AsyncReadExt;

#[derive(Debug, clap::Parser)]
#[command(name = "ask")]
#[command(about = "Pick a technique for a prompt, rewrite the prompt, and answer it")]
pub struct App {
    /// The prompt to transform and answer (read from stdin when omitted)
    pub prompt: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let prompt = match app.prompt {
        Some(prompt) => prompt,
        None => read_stdin().await?,
    };

    let playground = Playground::from_global(&global)?;

    if global.verbose {
        eprintln!("Base URL: {}", global.base_url);
        eprintln!("Model: {}", playground.settings().model);
        eprintln!("Prompt length: {} chars", prompt.len());
    }

    let output = playground.respond(&prompt).await;

    if app.json {
        println!("{}", format_json(&output)?);
    } else {
        println!("{}", format_text(&output));
    }

    Ok(())
}

async fn read_stdin() -> Result<String> {
    let mut prompt = String::new();
    tokio::io::stdin()
        .read_to_string(&mut prompt)
        .await
        .context("Failed to read prompt from stdin")?;
    Ok(strip_line_ending(prompt))
}

/// Drop the newline that terminates piped or typed input.
fn strip_line_ending(mut input: String) -> String {
    let len = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(len);
    input
}

pub fn format_json(output: &DisplayOutput) -> Result<String> {
    serde_json::to_string_pretty(output).context("Failed to serialize output")
}

/// The three outputs as labeled sections, in the order the form shows them.
pub fn format_text(output: &DisplayOutput) -> String {
    let sections = [
        ("Selected Technique", &output.technique),
        ("Transformed Prompt", &output.transformed_prompt),
        ("AI Response", &output.response),
    ];

    sections
        .iter()
        .map(|(label, value)| format!("{}\n{}", label.bold().cyan(), value.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
