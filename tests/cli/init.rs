use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .lutkeyrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".lutkeyrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["tableFile"], "./i18n/lut.json");
    assert_eq!(parsed["maxSegmentLength"], 64);
    assert_eq!(parsed["maxIterations"], 1000);
    assert_eq!(parsed["leafPolicy"], "path");
    assert!(content.ends_with('\n'));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lutkeyrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .lutkeyrc.json already exists
    ");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    assert_cmd_snapshot!(test.key_command("Hello").args(["--path", "p"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    paragraph

    ----- stderr -----
    1 new entry not saved (dry run, use --apply to save)
    ");

    Ok(())
}
