use std::{io, path::PathBuf};

use ::config::ConfigError as ConfigLoaderError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading or validating the wizard configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Local validation failures for the API credential pair.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Both API ID and API Hash are required.")]
    MissingCredentials,
    #[error("API ID must be a number.")]
    InvalidApiId { value: String },
    #[error("Failed to read `{field}` from the terminal: {source}")]
    Prompt {
        field: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Failures surfaced while logging in to Telegram.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Could not connect to Telegram: {message}")]
    Connect { message: String },
    #[error("Telegram refused to send a login code: {message}")]
    RequestCode { message: String },
    #[error("The login code was rejected")]
    InvalidCode,
    #[error("The two-step verification password was rejected")]
    InvalidPassword,
    #[error("No Telegram account is registered for this phone number")]
    SignUpRequired,
    #[error("Sign-in failed: {message}")]
    SignIn { message: String },
    #[error("Could not export the session: {message}")]
    SessionExport { message: String },
    #[error(transparent)]
    Prompt(#[from] InputError),
}

/// Top-level failure of the setup flow.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl SetupError {
    /// Descriptor carrying the code and remediation shown to the user.
    pub fn descriptor(&self) -> &'static ErrorDescriptor {
        match self {
            SetupError::Config(_) => &CONFIG_INVALID_ERROR,
            SetupError::Input(_) => &CREDENTIALS_INVALID_ERROR,
            SetupError::Auth(_) => &TELEGRAM_AUTH_FAILED_ERROR,
            SetupError::Output(_) => &OUTPUT_FAILED_ERROR,
        }
    }
}

/// Structured error metadata printed alongside a failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// Short summary used in logs.
    pub message: &'static str,
    /// Recommended remediation. Empty when the message speaks for itself.
    pub remediation: &'static str,
}

impl ErrorDescriptor {
    /// Simple constructor.
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }

    pub fn has_remediation(&self) -> bool {
        !self.remediation.trim().is_empty()
    }
}

/// Empty, whitespace-only or non-numeric credential input.
pub const CREDENTIALS_INVALID_ERROR: ErrorDescriptor = ErrorDescriptor::new(
    "CREDENTIALS_INVALID",
    "API credentials are missing or malformed",
    "",
);

/// Any failure reported by the Telegram login.
pub const TELEGRAM_AUTH_FAILED_ERROR: ErrorDescriptor = ErrorDescriptor::new(
    "TELEGRAM_AUTH_FAILED",
    "Telegram login did not complete",
    "Please check your credentials and try again.",
);

/// Wizard configuration file could not be used.
pub const CONFIG_INVALID_ERROR: ErrorDescriptor = ErrorDescriptor::new(
    "CONFIG_INVALID",
    "Wizard configuration file is invalid",
    "Fix the file or remove it to use the built-in defaults.",
);

/// Standard output was closed while printing.
pub const OUTPUT_FAILED_ERROR: ErrorDescriptor =
    ErrorDescriptor::new("OUTPUT_FAILED", "Could not write to standard output", "");
