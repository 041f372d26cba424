//! The setup flow: credentials, Telegram login, configuration output.
use std::io::Write;

use tracing::info;

use crate::{
    cli::{WizardMode, WizardProfile},
    config::WizardConfig,
    lib::{errors::SetupError, telemetry},
    telegram::Authenticator,
};

pub mod credentials;
pub mod demo;
pub mod exit;
pub mod prompt;
pub mod render;

pub use credentials::{acquire_credentials, validate_credentials};
pub use demo::show_demo;
pub use exit::WizardExit;
pub use prompt::{Prompt, Prompter, TerminalPrompter};
pub use render::{print_config, render_config, RenderedConfig, TemplateValues};

use render::{write_banner, write_rule};

/// Run one wizard session. Nothing is written to `out` past the step headers unless login succeeds.
pub async fn run_wizard<A: Authenticator>(
    profile: &WizardProfile,
    config: &WizardConfig,
    authenticator: &A,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), SetupError> {
    let config_path = config.source_path.to_string_lossy();
    telemetry::emit_wizard_mode(&telemetry::WizardModeTelemetry {
        demo: matches!(profile.mode, WizardMode::Demo),
        credential_source: profile.mode.credential_source(),
        config_path: config_path.as_ref(),
        config_from_file: config.from_file,
        server_name: &config.server.name,
        image: &config.server.image,
    });

    let preset = match &profile.mode {
        WizardMode::Demo => {
            show_demo(out, &config.server)?;
            return Ok(());
        }
        WizardMode::Live { preset } => preset.clone(),
    };

    writeln!(out)?;
    write_banner(out, "Telegram MCP Setup Wizard")?;
    writeln!(out)?;

    match &preset {
        Some(credentials) => {
            writeln!(
                out,
                "Using provided credentials (API ID: {})",
                credentials.api_id
            )?;
            writeln!(out)?;
        }
        None => {
            writeln!(out, "Step 1: Enter your Telegram API credentials")?;
            writeln!(out, "        (from https://my.telegram.org)")?;
            writeln!(out)?;
            out.flush()?;
        }
    }
    let credentials = acquire_credentials(preset, prompter)?;

    write_rule(out)?;
    writeln!(out, "Step 2: Connect your Telegram account")?;
    write_rule(out)?;
    writeln!(out)?;
    writeln!(
        out,
        "A verification code will be sent to your Telegram app."
    )?;
    writeln!(out)?;
    out.flush()?;

    let session = authenticator.authenticate(&credentials, prompter).await?;
    info!(
        target: "telegram_mcp_setup::wizard",
        api_id = credentials.api_id,
        "Exported Telegram session"
    );

    let rendered = render_config(
        &config.server,
        &TemplateValues::from_login(&credentials, &session),
    )
    .map_err(std::io::Error::from)?;

    writeln!(out)?;
    write_banner(out, "SUCCESS! Here's your config.")?;
    print_config(out, &rendered)?;
    Ok(())
}
