use anyhow::Result;

use crate::common::run_wizard;

#[test]
fn blank_credentials_exit_one() -> Result<()> {
    let run = run_wizard(&[], "   \n\n")?;
    assert_eq!(run.code(), Some(1));
    assert!(
        run.stderr()
            .contains("Error: Both API ID and API Hash are required."),
        "stderr: {}",
        run.stderr()
    );
    assert!(!run.stdout().contains("Step 2"));
    Ok(())
}

#[test]
fn closed_stdin_counts_as_blank_credentials() -> Result<()> {
    let run = run_wizard(&[], "")?;
    assert_eq!(run.code(), Some(1));
    assert!(run.stderr().contains("required"), "stderr: {}", run.stderr());
    Ok(())
}

#[test]
fn non_numeric_api_id_exits_one() -> Result<()> {
    let run = run_wizard(&[], "abc\ndef\n")?;
    assert_eq!(run.code(), Some(1));
    assert!(
        run.stderr().contains("API ID must be a number."),
        "stderr: {}",
        run.stderr()
    );
    assert!(!run.stdout().contains("mcpServers"));
    Ok(())
}

#[test]
fn partial_flags_fall_back_to_prompts() -> Result<()> {
    let run = run_wizard(&["--api-id", "111"], "")?;
    assert_eq!(run.code(), Some(1));

    let stdout = run.stdout();
    assert!(stdout.contains("Step 1: Enter your Telegram API credentials"));
    assert!(stdout.contains("API ID (number): "));
    assert!(!stdout.contains("Using provided credentials"));
    Ok(())
}

#[test]
fn non_numeric_api_id_flag_is_a_usage_error() -> Result<()> {
    let run = run_wizard(&["--api-id", "abc", "--api-hash", "def"], "")?;
    assert_eq!(run.code(), Some(2));
    Ok(())
}
