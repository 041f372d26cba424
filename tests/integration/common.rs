use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_telegram-mcp-setup");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Run the wizard in an empty working directory, feeding `stdin` through a pipe.
pub fn run_wizard(args: &[&str], stdin: &str) -> Result<WizardRun> {
    run_wizard_with(args, stdin, &[], &[])
}

/// Like `run_wizard`, with extra environment variables and files written into the working
/// directory first.
pub fn run_wizard_with(
    args: &[&str],
    stdin: &str,
    envs: &[(&str, &str)],
    files: &[(&str, &str)],
) -> Result<WizardRun> {
    let workdir = tempfile::tempdir().context("failed to create working directory")?;
    for (name, content) in files {
        let path = workdir.path().join(name);
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let mut child = Command::new(BINARY_PATH)
        .args(args)
        .current_dir(workdir.path())
        .env_remove("TELEGRAM_MCP_SETUP_CONFIG")
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn wizard process")?;

    {
        let mut pipe = child.stdin.take().context("child stdin")?;
        // The wizard may exit before reading everything.
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child
        .wait_with_output()
        .context("failed to wait for wizard process")?;
    Ok(WizardRun {
        output,
        _workdir: workdir,
    })
}

pub struct WizardRun {
    pub output: Output,
    _workdir: TempDir,
}

impl WizardRun {
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }
}
