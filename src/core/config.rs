use crate::core::dirs::get_config_directory;
use crate::core::error::MetaphorError;
use crate::core::tone::Tone;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub quote_api_url: String,
    pub generation_model: String,
    pub analysis_model: String,
    pub default_tone: Tone,
    pub default_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.openai.com/v1".to_string(),
            quote_api_url: "https://api.quotable.io".to_string(),
            generation_model: "gpt-4".to_string(),
            analysis_model: "gpt-4-1106-preview".to_string(),
            default_tone: Tone::Poetic,
            default_languages: vec![
                "Spanish".to_string(),
                "French".to_string(),
                "German".to_string(),
            ],
            api_key: None,
        }
    }
}

impl AppConfig {
    pub fn load_or_create() -> Result<Self, MetaphorError> {
        let config_dir = get_config_directory()?;
        Self::load_or_create_in(&config_dir)
    }

    pub fn load_or_create_in(config_dir: &Path) -> Result<Self, MetaphorError> {
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save_in(config_dir)?;
            Ok(config)
        }
    }

    /// Like [`AppConfig::load_or_create`], but never fails.
    pub fn load_or_default() -> Self {
        Self::load_or_create().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {e}");
            Self::default()
        })
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<(), MetaphorError> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    /// The environment wins over the config file.
    pub fn api_key(&self) -> Option<String> {
        let usable = |key: &String| !key.trim().is_empty();
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(usable)
            .or_else(|| self.api_key.clone().filter(usable))
    }
}
