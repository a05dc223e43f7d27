//! gh CLI transport shim.
//!
//! All remote access goes through the authenticated `gh` binary as a
//! subprocess. Exit code 0 means success; anything else carries a
//! diagnostic on stderr. No retries.

use std::process::Command;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Name of the external GitHub CLI binary.
const GH_BIN: &str = "gh";

/// Captured result of a `gh` invocation.
#[derive(Debug)]
pub struct GhOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run `gh` with the given arguments and capture its output.
///
/// Errors only when the process cannot be spawned; callers inspect
/// `success` themselves. Use [`run_checked`] when a non-zero exit
/// should be fatal.
pub fn run(args: &[&str]) -> Result<GhOutput> {
    trace!(?args, "running gh");

    let output = Command::new(GH_BIN).args(args).output().map_err(|e| {
        if which::which(GH_BIN).is_err() {
            Error::GhNotFound
        } else {
            Error::Io(e)
        }
    })?;

    Ok(GhOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run `gh` and fail with [`Error::CommandFailed`] on non-zero exit.
pub fn run_checked(args: &[&str]) -> Result<GhOutput> {
    let output = run(args)?;
    if !output.success {
        return Err(Error::CommandFailed {
            stderr: output.stderr,
        });
    }
    Ok(output)
}

/// Check that `gh` is installed and authenticated.
///
/// Runs `gh auth status` on every command; nothing is cached.
pub fn check_auth() -> Result<()> {
    let output = run(&["auth", "status"])?;
    if !output.success {
        debug!(stderr = %output.stderr, "gh auth status failed");
        return Err(Error::Unauthenticated);
    }
    Ok(())
}

/// Resolve the current repository as `owner/name`.
pub fn current_repo() -> Result<String> {
    let output = run_checked(&[
        "repo",
        "view",
        "--json",
        "nameWithOwner",
        "-q",
        ".nameWithOwner",
    ])?;
    Ok(output.stdout.trim().to_string())
}
