//! CLI entrypoint module structure.
pub mod args;
pub mod profile;

pub use args::WizardArgs;
pub use profile::{
    preset_credentials, resolve_config_path, ConfigLocation, CredentialSource, WizardMode,
    WizardProfile, CONFIG_ENV, DEFAULT_CONFIG,
};
