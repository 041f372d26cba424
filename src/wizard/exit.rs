use std::{io::Write, process::ExitCode};

use anyhow::Error;

use crate::lib::errors::SetupError;

/// Bundles a user-facing error message with an exit code and optional remediation line.
#[derive(Debug)]
pub struct WizardExit {
    message: String,
    remediation: Option<&'static str>,
    code: &'static str,
    exit_code: ExitCode,
}

impl WizardExit {
    pub fn from_setup_error(err: SetupError) -> Self {
        let descriptor = err.descriptor();
        Self {
            message: err.to_string(),
            remediation: descriptor
                .has_remediation()
                .then_some(descriptor.remediation),
            code: descriptor.code,
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            remediation: None,
            code: "INTERNAL",
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Print the failure to `err_out` and hand back the exit code.
    pub fn report_to(self, err_out: &mut dyn Write) -> ExitCode {
        tracing::debug!(
            target: "telegram_mcp_setup::wizard",
            code = self.code,
            "Setup wizard failed"
        );
        let _ = writeln!(err_out);
        let _ = writeln!(err_out, "Error: {}", self.message);
        if let Some(remediation) = self.remediation {
            let _ = writeln!(err_out, "{remediation}");
        }
        let _ = err_out.flush();
        self.exit_code
    }

    pub fn report(self) -> ExitCode {
        self.report_to(&mut std::io::stderr())
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<SetupError> for WizardExit {
    fn from(err: SetupError) -> Self {
        Self::from_setup_error(err)
    }
}
