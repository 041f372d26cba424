//! WizardProfile and config path / preset credential resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::telegram::ApiCredentials;

pub const DEFAULT_CONFIG: &str = "telegram-mcp-setup.toml";
pub const CONFIG_ENV: &str = "TELEGRAM_MCP_SETUP_CONFIG";

/// Where the API credential pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Flags,
    Prompt,
    Demo,
}

impl CredentialSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Flags => "flags",
            CredentialSource::Prompt => "prompt",
            CredentialSource::Demo => "demo",
        }
    }
}

/// What the wizard is going to do.
#[derive(Debug, Clone)]
pub enum WizardMode {
    /// Print a scripted transcript with placeholder values.
    Demo,
    /// Log in for real. `preset` holds credentials supplied as flags.
    Live { preset: Option<ApiCredentials> },
}

impl WizardMode {
    pub fn credential_source(&self) -> CredentialSource {
        match self {
            WizardMode::Demo => CredentialSource::Demo,
            WizardMode::Live { preset: Some(_) } => CredentialSource::Flags,
            WizardMode::Live { preset: None } => CredentialSource::Prompt,
        }
    }
}

/// Location of the optional wizard configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Named by `--config` or the environment; must then exist.
    pub explicit: bool,
}

/// Resolved wizard profile.
#[derive(Debug, Clone)]
pub struct WizardProfile {
    pub mode: WizardMode,
    pub config: ConfigLocation,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<ConfigLocation> {
    let (path, explicit) = match override_path {
        Some(path) => (path, true),
        None => match env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), true),
            None => (PathBuf::from(DEFAULT_CONFIG), false),
        },
    };

    if path.is_absolute() {
        return Ok(ConfigLocation { path, explicit });
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(ConfigLocation {
        path: cwd.join(path),
        explicit,
    })
}

/// Credentials are taken from flags only when both are present and non-empty.
/// Anything less falls through to prompting for both.
pub fn preset_credentials(
    api_id: Option<i32>,
    api_hash: Option<String>,
) -> Option<ApiCredentials> {
    match (api_id, api_hash) {
        (Some(api_id), Some(api_hash)) if api_id != 0 && !api_hash.is_empty() => {
            Some(ApiCredentials { api_id, api_hash })
        }
        _ => None,
    }
}
