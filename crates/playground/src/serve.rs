use crate::pipeline::Playground;
use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use playground_core::page::{render_page, PageView};
use playground_core::pipeline::DisplayOutput;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the playground form over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, default_value = "7860")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[derive(Debug, Default, Deserialize)]
struct PromptInput {
    #[serde(default)]
    prompt: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let playground = Arc::new(Playground::from_global(&global)?);
    let addr = format!("{}:{}", app.host, app.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    if global.verbose {
        eprintln!("Playground listening on http://{}", addr);
        eprintln!("Model: {}", playground.settings().model);
    }
    log::info!("Listening on http://{addr}");

    axum::serve(listener, router(playground))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(playground: Arc<Playground>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/generate", post(generate_handler))
        .layer(cors);

    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .merge(api)
        .with_state(playground)
}

async fn index_handler() -> Html<String> {
    Html(render_page(&PageView::default()))
}

async fn submit_handler(
    State(playground): State<Arc<Playground>>,
    Form(input): Form<PromptInput>,
) -> Html<String> {
    let output = playground.respond(&input.prompt).await;

    Html(render_page(&PageView {
        prompt: input.prompt,
        output: Some(output),
    }))
}

async fn generate_handler(
    State(playground): State<Arc<Playground>>,
    Json(input): Json<PromptInput>,
) -> Json<DisplayOutput> {
    Json(playground.respond(&input.prompt).await)
}
