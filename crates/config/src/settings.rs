use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub data: DataSettings,
    pub ai: AiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub dir: PathBuf,
}

/// Provider selection for the offline text/alignment tooling. The server
/// only loads and reports these; nothing in the request path calls out.
#[derive(Debug, Deserialize, Clone)]
pub struct AiSettings {
    pub provider: AiProvider,
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    pub model_expensive: String,
    pub model_cheap: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    Mock,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("LINGUATALK"),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default(
                "app.cors_origins",
                vec![
                    "http://localhost:5173".to_string(),
                    "http://127.0.0.1:5173".to_string(),
                ],
            )?
            .set_default("data.dir", "../data")?
            .set_default("ai.provider", "mock")?
            .set_default("ai.openai_api_key", "")?
            .set_default("ai.anthropic_api_key", "")?
            .set_default("ai.model_expensive", "gpt-4o")?
            .set_default("ai.model_cheap", "gpt-4o-mini")?
            .build()?;

        config.try_deserialize()
    }

    /// Directory containing talk data: `{data.dir}/talks`.
    pub fn talks_dir(&self) -> PathBuf {
        self.data.dir.join("talks")
    }
}
