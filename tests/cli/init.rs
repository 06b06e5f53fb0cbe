use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, SAMPLE_TOKENS, run, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .tokenrc.json\n");

    let content = test.read_file(".tokenrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["tokensFile"], "./tokens.json");
    assert_eq!(parsed["namespace"], "ld");
    assert!(parsed["ignores"].as_array().unwrap().is_empty());
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tokenrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "\u{2718} .tokenrc.json already exists\n");
    assert_eq!(test.read_file(".tokenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("tokens.json", SAMPLE_TOKENS)?;

    let mut init = test.command();
    init.arg("init");
    run(init)?;

    let output = run(test.check_command())?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: tokenctl"));

    Ok(())
}
