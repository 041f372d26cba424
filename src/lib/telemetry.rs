//! Tracing initialization and structured wizard events.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::CredentialSource;

/// Default filter when `RUST_LOG` is unset. Keeps the terminal quiet for the operator.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing`, writing to stderr so stdout stays paste-clean.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing how a wizard run was started.
#[derive(Debug)]
pub struct WizardModeTelemetry<'a> {
    pub demo: bool,
    pub credential_source: CredentialSource,
    pub config_path: &'a str,
    pub config_from_file: bool,
    pub server_name: &'a str,
    pub image: &'a str,
}

/// Emit the wizard start event. Secrets are never part of the payload.
pub fn emit_wizard_mode(telemetry: &WizardModeTelemetry<'_>) {
    info!(
        target: "telegram_mcp_setup::wizard",
        demo = telemetry.demo,
        credential_source = telemetry.credential_source.as_str(),
        config_path = telemetry.config_path,
        config_from_file = telemetry.config_from_file,
        server_name = telemetry.server_name,
        image = telemetry.image,
        "Started setup wizard"
    );
}

/// Emit a login milestone for the given API ID.
pub fn emit_auth_step(api_id: i32, step: &'static str) {
    debug!(
        target: "telegram_mcp_setup::auth",
        api_id,
        step,
        "Telegram login progressed"
    );
}
