use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда
    pub static_dir: String,
}

/// REST бэкенд мастерской
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Включает префикс `/api` бэкенда
    pub base_url: String,
    pub timeout_secs: u64,
}

/// OpenAI-совместимый сервис генерации текста
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_base: String,
    /// Имя переменной окружения с ключом; сам ключ в файле не хранится
    pub api_key_env: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Ключ из окружения; `None`, если переменная не задана или пуста
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
base_url = "http://localhost:5000/api"
timeout_secs = 30

[llm]
api_base = "https://api.openai.com/v1"
api_key_env = "GATEWAY_LLM_API_KEY"
model = "gpt-4o-mini"
temperature = 0.7
max_tokens = 1200
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                return load_from(&config_path);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn load_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.base_url, "http://localhost:5000/api");
        assert_eq!(config.llm.api_key_env, "GATEWAY_LLM_API_KEY");
    }

    #[test]
    fn missing_key_variable_means_no_key() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.llm.api_key_env = "GATEWAY_TEST_KEY_THAT_IS_NEVER_SET".into();
        assert_eq!(config.llm.api_key(), None);
    }
}
