pub mod informes;
pub mod proxy;

use crate::shared::config::Config;
use crate::shared::llm::{LlmProvider, OpenAiProvider};
use std::sync::Arc;
use std::time::Duration;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_base: String,
    /// `None`, если ключ модели не задан
    pub llm: Option<Arc<dyn LlmProvider>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_secs))
            .build()?;

        let llm: Option<Arc<dyn LlmProvider>> = match config.llm.api_key() {
            Some(key) => {
                tracing::info!("AI analysis enabled, model {}", config.llm.model);
                Some(Arc::new(OpenAiProvider::new(&config.llm, key)))
            }
            None => {
                tracing::warn!(
                    "{} is not set, AI analysis disabled",
                    config.llm.api_key_env
                );
                None
            }
        };

        Ok(Self {
            http,
            upstream_base: config.upstream.base_url.clone(),
            llm,
        })
    }
}
