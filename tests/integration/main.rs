mod show;

use std::{
    path::Path,
    process::{Command, Output},
};

use anyhow::Result;
use assert_cmd::cargo::CommandCargoExt;

/// Every variable the binary reads from the environment.
const VARS: [&str; 7] = [
    "X_API_KEY",
    "X_API_SECRET",
    "X_BEARER_TOKEN",
    "X_ACCESS_TOKEN",
    "X_ACCESS_SECRET",
    "X_COMMUNITY_ID",
    "XCONFIG_DIRECTORY",
];

/// Run xconfig in `directory` with exactly the given variables set.
///
/// No `--directory` is passed, so the `.env` search starts at the working directory.
fn xconfig(directory: &Path, args: &[&str], vars: &[(&str, &str)]) -> Result<Output> {
    let mut command = Command::cargo_bin("xconfig")?;
    for var in VARS {
        command.env_remove(var);
    }
    let output = command
        .env("NO_COLOR", "1")
        .envs(vars.iter().copied())
        .current_dir(directory)
        .args(args)
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
