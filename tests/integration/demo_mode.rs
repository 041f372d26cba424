use anyhow::Result;
use serde_json::Value;

use crate::common::run_wizard;

#[test]
fn demo_prints_placeholder_config_and_exits_zero() -> Result<()> {
    let run = run_wizard(&["--demo"], "")?;
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());

    let stdout = run.stdout();
    for needle in [
        "\"TELEGRAM_API_ID=YOUR_API_ID\"",
        "\"TELEGRAM_API_HASH=YOUR_API_HASH\"",
        "\"TELEGRAM_SESSION_STRING=YOUR_SESSION_STRING\"",
    ] {
        assert!(stdout.contains(needle), "missing {needle} in:\n{stdout}");
    }
    Ok(())
}

#[test]
fn demo_short_flag_ignores_credentials() -> Result<()> {
    let run = run_wizard(&["-d", "--api-id", "111", "--api-hash", "abc"], "")?;
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());

    let stdout = run.stdout();
    assert!(stdout.contains("(DEMO MODE)"));
    assert!(!stdout.contains("TELEGRAM_API_ID=111"));
    Ok(())
}

#[test]
fn demo_json_block_is_valid() -> Result<()> {
    let run = run_wizard(&["--demo"], "")?;
    let stdout = run.stdout();

    let start = stdout.find("{\n").expect("JSON block start");
    let end = stdout[start..].find("\n}\n").expect("JSON block end") + start + 2;
    let value: Value = serde_json::from_str(&stdout[start..end])?;
    assert_eq!(value["mcpServers"]["telegram"]["command"], "docker");
    Ok(())
}
