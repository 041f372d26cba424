use anyhow::Result;

use crate::common::{fixture, run_wizard, run_wizard_with};

const INVALID_SCOPE: &str = "[server]\nscope = \"global\"\n";

#[test]
fn config_file_customizes_demo_output() -> Result<()> {
    let path = fixture("tests/fixtures/config_valid.toml");
    let run = run_wizard(&["--demo", "--config", &path], "")?;
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());

    let stdout = run.stdout();
    assert!(stdout.contains("\"tg\": {"));
    assert!(stdout.contains("claude mcp add tg-mcp -s project -- docker run --rm -i"));
    assert!(stdout.contains("example/telegram-mcp:1.2.3"));
    Ok(())
}

#[test]
fn demo_ignores_invalid_config_file() -> Result<()> {
    let path = fixture("tests/fixtures/config_invalid_scope.toml");
    let run = run_wizard(&["--demo", "--config", &path], "")?;
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());
    assert!(run
        .stdout()
        .contains("claude mcp add telegram-mcp -s user -- docker run"));
    Ok(())
}

#[test]
fn demo_ignores_stray_default_config_file() -> Result<()> {
    let run = run_wizard_with(
        &["--demo"],
        "",
        &[],
        &[("telegram-mcp-setup.toml", INVALID_SCOPE)],
    )?;
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());
    assert!(run
        .stdout()
        .contains("\"TELEGRAM_SESSION_STRING=YOUR_SESSION_STRING\""));
    Ok(())
}

#[test]
fn demo_ignores_missing_config_from_environment() -> Result<()> {
    let run = run_wizard_with(
        &["--demo"],
        "",
        &[("TELEGRAM_MCP_SETUP_CONFIG", "/nonexistent/telegram-mcp-setup.toml")],
        &[],
    )?;
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());
    Ok(())
}

#[test]
fn invalid_config_file_fails_live_run() -> Result<()> {
    let path = fixture("tests/fixtures/config_invalid_scope.toml");
    let run = run_wizard(
        &["--api-id", "111", "--api-hash", "abc", "--config", &path],
        "",
    )?;
    assert_eq!(run.code(), Some(1));
    assert!(run.stderr().contains("server.scope"), "stderr: {}", run.stderr());
    assert!(run.stdout().is_empty());
    Ok(())
}

#[test]
fn missing_explicit_config_file_fails_live_run() -> Result<()> {
    let run = run_wizard(
        &["--api-id", "111", "--api-hash", "abc", "--config", "does-not-exist.toml"],
        "",
    )?;
    assert_eq!(run.code(), Some(1));
    assert!(run.stdout().is_empty());
    Ok(())
}
