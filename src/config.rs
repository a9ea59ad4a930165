use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_MODEL_PATH: &str = "models/linear_exam_score.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let model_path = match lookup("EXAM_ADVISOR_MODEL") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    name: "EXAM_ADVISOR_MODEL",
                })
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_MODEL_PATH),
        };

        let log_level = lookup("EXAM_ADVISOR_LOG_LEVEL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            model_path,
            log_level,
        })
    }
}
