//! Command-line interface.

pub mod completions;
pub mod get;
pub mod list_vars;
pub mod output;
pub mod set;
pub mod show;
pub mod testconf;

use clap::{Parser, Subcommand, ValueEnum};

/// Warning shown whenever variable values cross the boundary.
///
/// Unlike secrets, variable values are readable through the API, so any
/// repository collaborator with the right permissions can see them.
pub(crate) const VISIBILITY_WARNING: &str =
    "variable values are retrievable via the API and may be visible to repository collaborators";

/// ghenv - sync .env files with GitHub repository secrets and variables.
#[derive(Parser)]
#[command(
    name = "ghenv",
    about = "Sync your .env files with GitHub repository secrets and variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Round-trip a throwaway entry to validate auth and permissions
    Testconf {
        /// Remote store to exercise
        #[arg(long, value_enum, default_value = "secrets")]
        kind: Kind,
    },

    /// Fetch remote entries and write them to a .env file
    Get {
        /// Output file path
        #[arg(short, long, default_value = ".env")]
        file: String,

        /// Remote store to read from
        #[arg(long, value_enum, default_value = "secrets")]
        kind: Kind,
    },

    /// Read a .env file and push its entries to the repository
    Set {
        /// Input file path
        #[arg(short, long, default_value = ".env")]
        file: String,

        /// Remote store to write to
        #[arg(long, value_enum, default_value = "secrets")]
        kind: Kind,
    },

    /// Show a single repository variable, including its value
    GetVariable {
        /// Variable name
        name: String,
    },

    /// Show a single repository secret's metadata
    GetSecret {
        /// Secret name
        name: String,
    },

    /// List all repository variables with their values
    ListVars,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Which remote store a command operates on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Actions secrets (values are write-only)
    Secrets,
    /// Repository variables (values are readable)
    Variables,
}

impl Kind {
    /// Plural noun for progress messages.
    pub fn noun(self) -> &'static str {
        match self {
            Kind::Secrets => "secrets",
            Kind::Variables => "variables",
        }
    }

    /// Singular noun for per-entry messages.
    pub fn singular(self) -> &'static str {
        match self {
            Kind::Secrets => "secret",
            Kind::Variables => "variable",
        }
    }
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Testconf { kind } => testconf::execute(kind),
        Get { file, kind } => get::execute(&file, kind),
        Set { file, kind } => set::execute(&file, kind),
        GetVariable { name } => show::variable(&name),
        GetSecret { name } => show::secret(&name),
        ListVars => list_vars::execute(),
        Completions { shell } => completions::execute(shell),
    }
}
