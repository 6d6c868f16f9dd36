use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{ReelError, Result};

pub const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub language: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("reel").join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        toml::from_str::<Config>(&content).unwrap_or_default()
    }
}

/// Resolve the TMDB API key: TMDB_API_KEY env var first, then the config file.
pub fn resolve_api_key(config: &Config) -> Result<String> {
    let env_key = std::env::var(API_KEY_ENV).ok();
    resolve_key_from(env_key, config).ok_or_else(|| {
        ReelError::Config(format!(
            "no TMDB API key found. Set {} or put api_key in ~/.config/reel/config.toml",
            API_KEY_ENV
        ))
    })
}

fn resolve_key_from(env_key: Option<String>, config: &Config) -> Option<String> {
    if let Some(key) = env_key {
        if !key.is_empty() {
            return Some(key);
        }
    }

    config.api_key.clone().filter(|k| !k.is_empty())
}
