//! Get command - fetch remote entries into a .env file.

use tracing::info;

use crate::cli::{output, Kind, VISIBILITY_WARNING};
use crate::core::env_file::{self, EnvEntry};
use crate::core::{gh, secrets, variables};
use crate::error::Result;

/// Fetch all remote entries and write them to a .env file.
///
/// Secrets come back as `NAME=` templates since their values cannot be
/// read; variables come back with values.
pub fn execute(file: &str, kind: Kind) -> Result<()> {
    println!("Checking gh CLI authentication...");
    gh::check_auth()?;

    let repo = gh::current_repo()?;
    println!("Getting {} from repository: {}", kind.noun(), repo);

    let entries: Vec<EnvEntry> = match kind {
        Kind::Secrets => secrets::list(&repo)?
            .into_iter()
            .map(|s| EnvEntry::template(s.name))
            .collect(),
        Kind::Variables => variables::list(&repo)?
            .into_iter()
            .map(|v| EnvEntry::new(v.name, v.value))
            .collect(),
    };

    if entries.is_empty() {
        println!("No {} found in repository.", kind.noun());
        return Ok(());
    }

    info!(count = entries.len(), file, "writing entries");
    println!("Found {} {}", entries.len(), kind.noun());

    if kind == Kind::Secrets {
        println!();
        println!("Note: secret values cannot be retrieved from GitHub.");
    }

    println!("Writing {} to {}...", kind.noun(), file);
    env_file::write(file, &entries)?;
    output::success(&format!("{} written to {}", kind.noun(), file));

    match kind {
        Kind::Secrets => {
            println!();
            println!("Please fill in the values manually.");
        }
        Kind::Variables => {
            println!();
            output::warn(VISIBILITY_WARNING);
        }
    }

    Ok(())
}
