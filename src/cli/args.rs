//! CLI argument definitions and `WizardProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{preset_credentials, resolve_config_path, WizardMode, WizardProfile};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Telegram MCP Setup Wizard",
    long_about = "Telegram MCP Setup Wizard.\n\nLogs in to your Telegram account, exports a session string, and prints ready-to-paste configuration for Claude Desktop and Claude Code.",
    after_help = "Hint: use `telegram-mcp-setup --demo` to preview the output without connecting to Telegram."
)]
pub struct WizardArgs {
    /// Telegram API ID (from my.telegram.org).
    #[arg(long = "api-id")]
    pub api_id: Option<i32>,
    /// Telegram API Hash (from my.telegram.org).
    #[arg(long = "api-hash")]
    pub api_hash: Option<String>,
    /// Demo mode: show example output without connecting.
    #[arg(short = 'd', long, default_value_t = false)]
    pub demo: bool,
    /// Path to the wizard TOML file (overrides TELEGRAM_MCP_SETUP_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

impl WizardArgs {
    /// Build a `WizardProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> Result<WizardProfile> {
        let config = resolve_config_path(self.config_override)?;
        let mode = if self.demo {
            WizardMode::Demo
        } else {
            WizardMode::Live {
                preset: preset_credentials(self.api_id, self.api_hash),
            }
        };

        Ok(WizardProfile { mode, config })
    }
}
