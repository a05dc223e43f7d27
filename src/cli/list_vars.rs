//! List all repository variables with their values.

use crate::cli::{output, VISIBILITY_WARNING};
use crate::core::{gh, variables};
use crate::error::Result;

/// Print every variable with value and timestamps.
pub fn execute() -> Result<()> {
    println!("Checking gh CLI authentication...");
    gh::check_auth()?;

    let repo = gh::current_repo()?;
    println!("Getting variables from repository: {}", repo);

    let vars = variables::list(&repo)?;

    if vars.is_empty() {
        println!("No variables found in repository.");
        return Ok(());
    }

    println!();
    output::success(&format!("found {} variable(s):", vars.len()));

    for var in &vars {
        println!();
        output::kv("name:", &var.name);
        output::kv("value:", &var.value);
        output::kv("created:", output::timestamp(var.created_at));
        output::kv("updated:", output::timestamp(var.updated_at));
    }

    println!();
    output::warn(VISIBILITY_WARNING);
    Ok(())
}
