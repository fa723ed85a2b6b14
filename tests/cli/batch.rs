use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::{CliTest, TABLE_PATH};

const ENTRIES: &str = r#"[
    { "text": "Account Settings", "path": ["settings", "h2"] },
    { "text": "Save", "file": "src/application/settings/Form/index.jsx", "path": ["Button"] },
    { "text": "Cancel", "file": "src/application/settings/Form/index.jsx", "path": ["Button"] },
    { "text": "Account Settings", "path": ["settings", "h2"] }
]"#;

#[test]
fn test_batch_prints_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("entries.json", ENTRIES)?;

    assert_cmd_snapshot!(test.batch_command("entries.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    settings.heading	Account Settings
    settings.button	Save
    settings.button1	Cancel
    settings.heading	Account Settings

    ----- stderr -----
    3 new entries not saved (dry run, use --apply to save)
    ");
    assert!(!test.root().join(TABLE_PATH).exists());

    Ok(())
}

#[test]
fn test_batch_apply_saves_table() -> Result<()> {
    let test = CliTest::with_table(r#"{ "home": "Home" }"#)?;
    test.write_file("entries.json", ENTRIES)?;

    assert_cmd_snapshot!(
        test.batch_command("entries.json").args(["--apply", "--table", TABLE_PATH]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    settings.heading	Account Settings
    settings.button	Save
    settings.button1	Cancel
    settings.heading	Account Settings
    ✓ Saved 4 entries to i18n/lut.json

    ----- stderr -----
    "
    );
    assert_eq!(
        test.read_table()?,
        json!({
            "home": "Home",
            "settings.button": "Save",
            "settings.button1": "Cancel",
            "settings.heading": "Account Settings"
        })
    );

    Ok(())
}

#[test]
fn test_batch_empty_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("entries.json", "[]")?;

    assert_cmd_snapshot!(test.batch_command("entries.json").arg("--apply"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    No entries in entries.json
    ");
    assert!(!test.root().join(TABLE_PATH).exists());

    Ok(())
}

#[test]
fn test_batch_rejects_malformed_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("entries.json", r#"{ "text": "Hi" }"#)?;

    let output = test.batch_command("entries.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON array of entries"));

    Ok(())
}
