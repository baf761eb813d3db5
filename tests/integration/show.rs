use anyhow::Result;
use expect_test::expect;
use tempfile::tempdir;

use crate::{stdout, xconfig};

const VARS: [(&str, &str); 3] = [
    ("X_API_KEY", "a"),
    ("X_BEARER_TOKEN", "super-secret"),
    ("X_COMMUNITY_ID", "1234"),
];

#[test]
fn show() -> Result<()> {
    let tmpdir = tempdir()?;

    let output = xconfig(tmpdir.path(), &["show"], &VARS)?;

    assert!(output.status.success());
    let expected = expect![[r#"
        X_API_KEY: Set
        X_API_SECRET: Not set
        X_BEARER_TOKEN: Set
        X_ACCESS_TOKEN: Not set
        X_ACCESS_SECRET: Not set
        X_COMMUNITY_ID: Set
    "#]];
    expected.assert_eq(&stdout(&output));
    Ok(())
}

#[test]
fn show_json() -> Result<()> {
    let tmpdir = tempdir()?;

    let output = xconfig(tmpdir.path(), &["show", "--json"], &VARS)?;

    assert!(output.status.success());
    let expected = expect![[r#"
        {
          "envVars": {
            "X_API_KEY": "Set",
            "X_API_SECRET": "Not set",
            "X_BEARER_TOKEN": "Set",
            "X_ACCESS_TOKEN": "Not set",
            "X_ACCESS_SECRET": "Not set",
            "X_COMMUNITY_ID": "Set"
          }
        }
    "#]];
    expected.assert_eq(&stdout(&output));
    Ok(())
}

#[test]
fn show_never_prints_values() -> Result<()> {
    let tmpdir = tempdir()?;

    let output = xconfig(tmpdir.path(), &["show", "--json"], &VARS)?;

    assert!(!stdout(&output).contains("super-secret"));
    Ok(())
}
