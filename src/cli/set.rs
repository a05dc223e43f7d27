//! Set command - push a .env file's entries to the repository.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Confirm;
use tracing::info;

use crate::cli::{output, Kind, VISIBILITY_WARNING};
use crate::core::{env_file, gh, secrets, variables};
use crate::error::Result;

/// Read a .env file and push every entry to the remote store.
///
/// Writes are independent round trips in file order; a failure partway
/// leaves earlier entries already set remotely.
pub fn execute(file: &str, kind: Kind) -> Result<()> {
    println!("Checking gh CLI authentication...");
    gh::check_auth()?;

    let repo = gh::current_repo()?;

    let entries = env_file::load(file)?;
    if entries.is_empty() {
        println!("No {} found in {}.", kind.noun(), file);
        return Ok(());
    }

    println!(
        "Found {} {} to set in repository: {}",
        entries.len(),
        kind.noun(),
        repo
    );

    // Variable values are readable by collaborators; a bulk write
    // needs explicit consent. Secrets stay write-only and need none.
    if kind == Kind::Variables {
        println!();
        output::warn("all values in the file will be set as variables of this repository");
        output::warn(VISIBILITY_WARNING);

        if !confirm("Do you want to continue?")? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    println!();
    println!("Setting {}...", kind.noun());
    for (name, value) in &entries {
        println!("Setting {}: {}...", kind.singular(), output::key(name));
        match kind {
            Kind::Secrets => secrets::set(&repo, name, value)?,
            Kind::Variables => variables::set(&repo, name, value)?,
        }
    }

    info!(count = entries.len(), kind = ?kind, "pushed entries");
    println!();
    output::success(&format!(
        "successfully set {} {}",
        entries.len(),
        kind.noun()
    ));
    Ok(())
}

/// Ask for confirmation, defaulting to no.
///
/// A terminal gets an interactive prompt; piped stdin reads a plain
/// y/n line so the gate stays scriptable.
fn confirm(prompt: &str) -> Result<bool> {
    if io::stdin().is_terminal() {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(matches!(line.trim(), "y" | "Y" | "yes"))
    }
}
