use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

const TABLE: &str = r#"{
    "settings.heading": "Account Settings",
    "settings.button": "Save",
    "home": "Home"
}"#;

#[test]
fn test_export_groups_keys() -> Result<()> {
    let test = CliTest::with_table(TABLE)?;

    assert_cmd_snapshot!(test.export_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "home": "home",
      "settings": {
        "button": "settings.button",
        "heading": "settings.heading"
      }
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_export_values() -> Result<()> {
    let test = CliTest::with_table(TABLE)?;

    assert_cmd_snapshot!(test.export_command().arg("--values"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "home": "Home",
      "settings": {
        "button": "Save",
        "heading": "Account Settings"
      }
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_table(TABLE)?;

    assert_cmd_snapshot!(test.export_command().args(["--values", "-o", "out/en.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 3 entries to out/en.json

    ----- stderr -----
    ");

    let content = test.read_file("out/en.json")?;
    assert!(content.ends_with('\n'));
    let tree: Value = serde_json::from_str(&content)?;
    assert_eq!(tree["settings"]["button"], "Save");

    Ok(())
}

#[test]
fn test_export_pseudo_keeps_shape() -> Result<()> {
    let test = CliTest::with_table(TABLE)?;

    let output = test.export_command().arg("--pseudo").output()?;
    assert!(output.status.success());

    let tree: Value =
        serde_json::from_slice(&output.stdout).context("Pseudo export should be JSON")?;
    let heading = tree["settings"]["heading"]
        .as_str()
        .context("heading should be a string")?;
    assert_eq!(heading.chars().count(), "Account Settings".chars().count());
    assert_ne!(heading, "Account Settings");
    assert_eq!(tree["home"].as_str().map(|s| s.chars().count()), Some(4));
    assert_eq!(tree["settings"]["button"].as_str().map(|s| s.chars().count()), Some(4));

    Ok(())
}
