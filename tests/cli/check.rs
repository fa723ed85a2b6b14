use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_check_clean_table() -> Result<()> {
    let test = CliTest::with_table(r#"{ "a.b": "B", "a.c": "C", "ab": "AB" }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No overlapping keys in 3 entries

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_reports_overlaps() -> Result<()> {
    let test = CliTest::with_table(r#"{ "a": "A", "a.b": "B", "a.b.c": "C" }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: key `a` has nested key `a.b`
    error: key `a` has nested key `a.b.c`
    error: key `a.b` has nested key `a.b.c`

    ✘ 3 overlapping key pair(s) in 3 entries

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_missing_table_is_clean() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No overlapping keys in 0 entries

    ----- stderr -----
    ");

    Ok(())
}
