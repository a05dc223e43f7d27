//! Repository variables accessor.
//!
//! Variables are readable through the REST API, which `gh api` fronts.
//! All writes go through create-or-update; nothing is transactional, so
//! a multi-entry push that fails partway leaves earlier entries set.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::core::gh;
use crate::error::Result;

/// A repository variable as returned by the variables API.
#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// List response wrapper: `{ "total_count": N, "variables": [...] }`.
#[derive(Debug, Deserialize)]
struct VariableList {
    #[serde(default)]
    variables: Vec<Variable>,
}

/// List all variables in the repository.
pub fn list(repo: &str) -> Result<Vec<Variable>> {
    let path = format!("repos/{}/actions/variables?per_page=100", repo);
    let output = gh::run_checked(&["api", &path])?;
    let parsed: VariableList = serde_json::from_str(&output.stdout)?;
    debug!(count = parsed.variables.len(), "listed variables");
    Ok(parsed.variables)
}

/// Fetch one variable, including its value.
pub fn get(repo: &str, name: &str) -> Result<Variable> {
    let path = format!("repos/{}/actions/variables/{}", repo, name);
    let output = gh::run_checked(&["api", &path])?;
    Ok(serde_json::from_str(&output.stdout)?)
}

/// Create or update a variable.
///
/// Update-in-place is attempted first; if that attempt reports failure
/// the variable is assumed absent and created instead. Known issue: a
/// PATCH rejected for any other reason (e.g. missing permission) takes
/// the same branch, and what the user sees is the create call's error.
pub fn set(repo: &str, name: &str, value: &str) -> Result<()> {
    let update_path = format!("repos/{}/actions/variables/{}", repo, name);
    let name_field = format!("name={}", name);
    let value_field = format!("value={}", value);

    let update = gh::run(&[
        "api",
        "--method",
        "PATCH",
        &update_path,
        "-f",
        &name_field,
        "-f",
        &value_field,
    ])?;
    if update.success {
        debug!(name, "updated variable");
        return Ok(());
    }

    debug!(name, stderr = %update.stderr, "update failed, creating");
    let create_path = format!("repos/{}/actions/variables", repo);
    gh::run_checked(&[
        "api",
        "--method",
        "POST",
        &create_path,
        "-f",
        &name_field,
        "-f",
        &value_field,
    ])?;
    Ok(())
}

/// Delete a variable.
pub fn delete(repo: &str, name: &str) -> Result<()> {
    let path = format!("repos/{}/actions/variables/{}", repo, name);
    gh::run_checked(&["api", "--method", "DELETE", &path])?;
    Ok(())
}
