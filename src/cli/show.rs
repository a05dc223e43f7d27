//! Single-entry inspection commands.

use crate::cli::{output, VISIBILITY_WARNING};
use crate::core::{gh, secrets, variables};
use crate::error::Result;

/// Show one repository variable, including its value.
pub fn variable(name: &str) -> Result<()> {
    println!("Checking gh CLI authentication...");
    gh::check_auth()?;

    let repo = gh::current_repo()?;
    println!("Getting variable info from repository: {}", repo);

    let var = variables::get(&repo, name)?;

    println!();
    output::success(&format!("variable '{}' found", name));
    output::kv("name:", &var.name);
    output::kv("value:", &var.value);
    output::kv("created:", output::timestamp(var.created_at));
    output::kv("updated:", output::timestamp(var.updated_at));

    println!();
    output::warn(VISIBILITY_WARNING);
    Ok(())
}

/// Show one repository secret's metadata. Values are write-only.
pub fn secret(name: &str) -> Result<()> {
    println!("Checking gh CLI authentication...");
    gh::check_auth()?;

    let repo = gh::current_repo()?;
    println!("Getting secret info from repository: {}", repo);

    let entry = secrets::get(&repo, name)?;

    println!();
    output::success(&format!("secret '{}' found", name));
    output::kv("name:", &entry.name);
    output::kv("created:", output::timestamp(entry.created_at));
    output::kv("updated:", output::timestamp(entry.updated_at));

    println!();
    println!("Note: secret values cannot be retrieved from GitHub.");
    Ok(())
}
