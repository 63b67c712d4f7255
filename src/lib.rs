pub mod api;
pub mod cache;
pub mod config;
pub mod gemini;

use std::sync::Arc;

use axum::Router;

use cache::AnswerCache;
use config::AppConfig;
use gemini::GeminiClient;

#[derive(Clone)]
pub struct AppState {
    pub client: GeminiClient,
    pub cache: Arc<AnswerCache>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: GeminiClient::new(&config.api_key, &config.model, &config.api_base),
            cache: Arc::new(AnswerCache::new(cache::ANSWER_CACHE_CAPACITY)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
