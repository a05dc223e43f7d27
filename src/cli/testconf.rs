//! Configuration self-test command.
//!
//! Creates a throwaway entry, waits out remote propagation, verifies it
//! can be read back, and deletes it again.

use std::thread;
use std::time::Duration;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use crate::cli::{output, Kind};
use crate::core::{gh, secrets, variables};
use crate::error::{Error, Result};

/// Value written to the throwaway entry.
const TEST_VALUE: &str = "test_value_12345";

/// Fixed wait for remote propagation before the read-back check.
const PROPAGATION_DELAY: Duration = Duration::from_secs(3);

/// Round-trip a throwaway entry to validate auth and permissions.
pub fn execute(kind: Kind) -> Result<()> {
    println!("Testing gh CLI authentication...");
    gh::check_auth()?;
    output::success("gh CLI is authenticated");

    let repo = gh::current_repo()?;
    output::success(&format!("using repository: {}", repo));

    let name = test_entry_name(kind);
    info!(name = %name, kind = ?kind, "starting round-trip");

    println!("Creating test {}: {}...", kind.singular(), name);
    match kind {
        Kind::Secrets => secrets::set(&repo, &name, TEST_VALUE)?,
        Kind::Variables => variables::set(&repo, &name, TEST_VALUE)?,
    }
    output::success(&format!("test {} created", kind.singular()));

    println!("Verifying test {} exists...", kind.singular());
    println!(
        "Waiting {} seconds before reading it back...",
        PROPAGATION_DELAY.as_secs()
    );
    thread::sleep(PROPAGATION_DELAY);

    // GitHub upper-cases entry names on creation.
    let expected = name.to_uppercase();
    verify(kind, &repo, &expected)?;

    println!("Deleting test {}...", kind.singular());
    match kind {
        Kind::Secrets => secrets::delete(&repo, &expected)?,
        Kind::Variables => variables::delete(&repo, &expected)?,
    }
    output::success(&format!("test {} deleted", kind.singular()));

    println!();
    output::success("all tests passed, configuration is working correctly");
    Ok(())
}

/// Check the entry is listed, and for variables that the value survived.
fn verify(kind: Kind, repo: &str, expected: &str) -> Result<()> {
    match kind {
        Kind::Secrets => {
            let listed = secrets::list(repo)?;
            if !listed.iter().any(|s| s.name == expected) {
                return Err(Error::VerificationMismatch(format!(
                    "test secret {} not found in repository",
                    expected
                )));
            }
            output::success("test secret verified");
        }
        Kind::Variables => {
            let listed = variables::list(repo)?;
            if !listed.iter().any(|v| v.name == expected) {
                return Err(Error::VerificationMismatch(format!(
                    "test variable {} not found in repository",
                    expected
                )));
            }
            output::success("test variable verified");

            let info = variables::get(repo, expected)?;
            if info.value != TEST_VALUE {
                return Err(Error::VerificationMismatch(format!(
                    "test variable {} value mismatch",
                    expected
                )));
            }
            output::success("test variable value verified");
        }
    }
    Ok(())
}

/// Throwaway entry name with a random lowercase-alphanumeric suffix.
fn test_entry_name(kind: Kind) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();

    format!("ghenv_test_{}_{}", kind.singular(), suffix)
}
