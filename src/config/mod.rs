//! Load and validate the optional wizard configuration.
use std::path::PathBuf;

use ::config::FileFormat;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::{
    cli::{ConfigLocation, WizardMode},
    lib::errors::ConfigError,
};

pub mod server;

pub use server::{
    parse_server_section, McpScope, RawServerSection, ServerSection, DEFAULT_CLI_NAME,
    DEFAULT_IMAGE, DEFAULT_SCOPE, DEFAULT_SERVER_NAME,
};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub server: ServerSection,
    pub source_path: PathBuf,
    /// False when built-in defaults were used because no file was present.
    pub from_file: bool,
}

#[derive(Debug, Deserialize)]
struct RawWizardConfig {
    server: Option<RawServerSection>,
}

impl WizardConfig {
    /// Built-in defaults, attributed to `path` for logging.
    pub fn defaults(path: PathBuf) -> Self {
        Self {
            server: ServerSection::default(),
            source_path: path,
            from_file: false,
        }
    }

    /// Load the file at `location`; a missing default file yields built-in defaults.
    pub fn load(location: &ConfigLocation) -> Result<Self, ConfigError> {
        if !location.explicit && !location.path.exists() {
            debug!(
                target: "telegram_mcp_setup::config",
                path = %location.path.display(),
                "No wizard configuration file; using defaults"
            );
            return Ok(Self::defaults(location.path.clone()));
        }
        Self::load_from_path(location.path.clone())
    }

    /// Load for the given mode. Demo mode never fails: any configuration error falls back to
    /// the built-in defaults.
    pub fn load_for_mode(
        location: &ConfigLocation,
        mode: &WizardMode,
    ) -> Result<Self, ConfigError> {
        match (Self::load(location), mode) {
            (Err(err), WizardMode::Demo) => {
                warn!(
                    target: "telegram_mcp_setup::config",
                    path = %location.path.display(),
                    reason = %err,
                    "Ignoring configuration file in demo mode; using defaults"
                );
                Ok(Self::defaults(location.path.clone()))
            }
            (result, _) => result,
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "telegram_mcp_setup::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = ::config::Config::builder()
            .add_source(::config::File::from(path.clone()).format(FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "telegram_mcp_setup::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawWizardConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "telegram_mcp_setup::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let server = parse_server_section(raw.server, &path).map_err(|err| {
            error!(
                target: "telegram_mcp_setup::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        info!(
            target: "telegram_mcp_setup::config",
            path = %path.display(),
            server_name = %server.name,
            cli_name = %server.cli_name,
            scope = server.scope.as_str(),
            image = %server.image,
            "Configuration file loaded successfully"
        );

        Ok(Self {
            server,
            source_path: path,
            from_file: true,
        })
    }
}
