use crate::models::ModelChoice;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "LEGAL_ASSISTANT_MODEL";
pub const SECRETS_PATH_VAR: &str = "LEGAL_ASSISTANT_SECRETS";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SECRETS_PATH: &str = ".legal-assistant/secrets.toml";

/// Everything the assistant needs at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub default_model: ModelChoice,
    pub secrets_path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    general: GeneralSecrets,
}

#[derive(Debug, Default, Deserialize)]
struct GeneralSecrets {
    openai_api_key: Option<String>,
}

impl Settings {
    /// Reads the process environment. Fails when no credential can be found;
    /// callers treat that as fatal.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets_path = lookup(SECRETS_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_PATH));

        let api_key = resolve_api_key(lookup(API_KEY_VAR), &secrets_path)?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let default_model = match lookup(MODEL_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<ModelChoice>()
                .with_context(|| format!("invalid {} value", MODEL_VAR))?,
            _ => ModelChoice::default(),
        };

        Ok(Self {
            api_key,
            base_url,
            default_model,
            secrets_path,
        })
    }
}

/// Environment first, then the secrets file.
fn resolve_api_key(from_env: Option<String>, secrets_path: &Path) -> Result<String> {
    if let Some(key) = from_env.filter(|k| !k.trim().is_empty()) {
        log::debug!("Using API key from {}", API_KEY_VAR);
        return Ok(key.trim().to_string());
    }

    if let Some(key) = read_secrets_file(secrets_path)? {
        log::debug!("Using API key from {}", secrets_path.display());
        return Ok(key);
    }

    Err(anyhow::anyhow!(
        "No OpenAI API key found. Set {} or add `openai_api_key` under [general] in {}",
        API_KEY_VAR,
        secrets_path.display()
    ))
}

fn read_secrets_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read secrets file {}", path.display()))?;
    let secrets: SecretsFile = toml::from_str(&raw)
        .with_context(|| format!("failed to parse secrets file {}", path.display()))?;

    Ok(secrets
        .general
        .openai_api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty()))
}
