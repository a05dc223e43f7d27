//! Actions secrets accessor.
//!
//! Secret values are write-only: GitHub never returns them, so reads
//! yield names and timestamps only.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::core::gh;
use crate::error::Result;

/// A repository secret as reported by the remote store.
///
/// List responses carry only `name`; the single-entry endpoint adds
/// timestamps. There is never a value.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// List all secrets in the repository.
pub fn list(repo: &str) -> Result<Vec<Secret>> {
    let output = gh::run_checked(&["secret", "list", "--repo", repo, "--json", "name"])?;
    let secrets: Vec<Secret> = serde_json::from_str(&output.stdout)?;
    debug!(count = secrets.len(), "listed secrets");
    Ok(secrets)
}

/// Fetch one secret's metadata.
pub fn get(repo: &str, name: &str) -> Result<Secret> {
    let path = format!("repos/{}/actions/secrets/{}", repo, name);
    let output = gh::run_checked(&["api", &path])?;
    Ok(serde_json::from_str(&output.stdout)?)
}

/// Create or update a secret. The gh subcommand is an idempotent upsert.
pub fn set(repo: &str, name: &str, value: &str) -> Result<()> {
    gh::run_checked(&["secret", "set", name, "--repo", repo, "--body", value])?;
    debug!(name, "set secret");
    Ok(())
}

/// Delete a secret.
pub fn delete(repo: &str, name: &str) -> Result<()> {
    gh::run_checked(&["secret", "delete", name, "--repo", repo])?;
    Ok(())
}
