//! Entry point for the Telegram MCP setup wizard.
use std::process::ExitCode;

use clap::Parser;
use telegram_mcp_setup::{
    cli::WizardArgs,
    config::WizardConfig,
    lib::{errors::SetupError, telemetry},
    telegram::TelegramAuthenticator,
    wizard::{self, TerminalPrompter, WizardExit},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), WizardExit> {
    telemetry::init_tracing().map_err(WizardExit::from_error)?;
    let profile = WizardArgs::parse()
        .into_profile()
        .map_err(WizardExit::from_error)?;
    let config = WizardConfig::load_for_mode(&profile.config, &profile.mode)
        .map_err(|err| WizardExit::from(SetupError::from(err)))?;

    let mut prompter = TerminalPrompter::new();
    let mut stdout = std::io::stdout();
    wizard::run_wizard(
        &profile,
        &config,
        &TelegramAuthenticator::new(),
        &mut prompter,
        &mut stdout,
    )
    .await
    .map_err(WizardExit::from)
}
