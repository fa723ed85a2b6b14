use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::{CliTest, TABLE_PATH};

#[test]
fn test_key_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.key_command("Account Settings")
            .args(["--path", "application", "--path", "settings", "--path", "h2"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    settings.heading

    ----- stderr -----
    1 new entry not saved (dry run, use --apply to save)
    "
    );
    assert!(!test.root().join(TABLE_PATH).exists());

    Ok(())
}

#[test]
fn test_key_apply_writes_table() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.key_command("Welcome")
            .args(["--path", "home", "--path", "p", "--suffix", "text", "--apply"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    home.paragraph.text

    ----- stderr -----
    "
    );
    assert_eq!(test.read_table()?, json!({ "home.paragraph.text": "Welcome" }));

    Ok(())
}

#[test]
fn test_key_is_idempotent_across_runs() -> Result<()> {
    let test = CliTest::new()?;
    test.key_command("Welcome")
        .args(["--path", "home", "--apply"])
        .output()?;

    // Nothing new, so no dry-run note either
    assert_cmd_snapshot!(test.key_command("Welcome").args(["--path", "home"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    home

    ----- stderr -----
    ");
    assert_eq!(test.read_table()?, json!({ "home": "Welcome" }));

    Ok(())
}

#[test]
fn test_key_avoids_existing_nested_keys() -> Result<()> {
    let test = CliTest::with_table(r#"{ "user": { "name": "Name" } }"#)?;

    assert_cmd_snapshot!(test.key_command("Jane").args(["--path", "user", "--apply"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    user.value

    ----- stderr -----
    ");
    assert_eq!(
        test.read_table()?,
        json!({ "user.name": "Name", "user.value": "Jane" })
    );

    Ok(())
}

#[test]
fn test_key_uses_file_location() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.key_command("Save").args([
            "--file",
            "src/application/account/Profile/index.jsx",
            "--path",
            "Button",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    account.button

    ----- stderr -----
    1 new entry not saved (dry run, use --apply to save)
    "
    );

    Ok(())
}

#[test]
fn test_key_respects_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lutkeyrc.json",
        r#"{ "tableFile": "locales/keys.json", "labels": { "Button": "action" } }"#,
    )?;

    assert_cmd_snapshot!(test.key_command("Save").args(["--path", "Button", "--apply"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    action

    ----- stderr -----
    ");
    assert!(test.root().join("locales/keys.json").exists());

    Ok(())
}

#[test]
fn test_key_table_with_numbers_is_an_error() -> Result<()> {
    let test = CliTest::with_table(r#"{ "title": "Title", "count": 3 }"#)?;

    assert_cmd_snapshot!(
        test.key_command("Hi").args(["--table", TABLE_PATH, "--apply"]),
        @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid table file i18n/lut.json: value at "count" is not a string
    "#
    );
    assert_eq!(test.read_table()?, json!({ "title": "Title", "count": 3 }));

    Ok(())
}

#[test]
fn test_key_invalid_table_is_an_error() -> Result<()> {
    let test = CliTest::with_table("{ not json")?;

    let output = test.key_command("Hi").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse JSON"));

    Ok(())
}

#[test]
fn test_key_iteration_limit_is_an_error() -> Result<()> {
    let test = CliTest::with_table(r#"{ "_": "A", "_1": "B" }"#)?;
    test.write_file(".lutkeyrc.json", r#"{ "maxIterations": 2 }"#)?;

    assert_cmd_snapshot!(test.key_command("C").arg("--apply"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: no free key for candidate "_" after 2 attempts
    "#);
    assert_eq!(test.read_table()?, json!({ "_": "A", "_1": "B" }));

    Ok(())
}
