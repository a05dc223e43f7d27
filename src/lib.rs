//! ghenv - sync .env files with GitHub repository secrets and variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── testconf      # Round-trip self-test of auth and permissions
//! │   ├── get           # Fetch remote entries into a .env file
//! │   ├── set           # Push a .env file to the repository
//! │   ├── show          # Single-entry inspection commands
//! │   ├── list_vars     # List variables with values
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── gh            # gh CLI transport shim
//!     ├── secrets       # Actions secrets accessor
//!     ├── variables     # Repository variables accessor
//!     └── env_file      # .env file codec
//! ```
//!
//! All remote access goes through the authenticated `gh` binary; this
//! crate never talks to the GitHub API directly. Every command run is
//! independent: nothing is cached between invocations.

pub mod cli;
pub mod core;
pub mod error;
