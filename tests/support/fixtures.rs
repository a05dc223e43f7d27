//! Canned fake-gh scripts for integration tests.
//!
//! Scripts dispatch on the full joined argument string, log each call
//! to `calls.log` next to the stub, and reject anything unexpected
//! with exit 64.

/// Repository every stub resolves to.
pub const REPO: &str = "acme/widgets";

/// Common head: log the invocation, accept auth, resolve the repo.
const SCRIPT_HEAD: &str = r##"#!/bin/sh
log="$(dirname "$0")/calls.log"
printf '%s\n' "$*" >> "$log"
case "$*" in
"auth status") exit 0 ;;
"repo view --json nameWithOwner -q .nameWithOwner") printf 'acme/widgets\n' ;;
"##;

/// Common tail: anything unmatched is an error.
const SCRIPT_TAIL: &str = r##"*) printf 'unexpected gh invocation: %s\n' "$*" >&2; exit 64 ;;
esac
"##;

/// Build a fake gh that accepts auth and answers the given case arms.
///
/// Each arm must be a complete `pattern) commands ;;` line.
pub fn gh_script(arms: &str) -> String {
    let mut script = String::from(SCRIPT_HEAD);
    script.push_str(arms);
    script.push_str(SCRIPT_TAIL);
    script
}

/// Fake gh that fails the auth check.
pub const UNAUTHENTICATED: &str = r##"#!/bin/sh
log="$(dirname "$0")/calls.log"
printf '%s\n' "$*" >> "$log"
case "$*" in
"auth status") printf 'You are not logged into any GitHub hosts.\n' >&2; exit 1 ;;
*) exit 64 ;;
esac
"##;

/// List response with two secrets.
pub const TWO_SECRETS_ARM: &str = r##""secret list --repo acme/widgets --json name") printf '[{"name":"API_KEY"},{"name":"DB_PASSWORD"}]\n' ;;
"##;

/// List response with two variables, one missing its timestamps.
pub const TWO_VARIABLES_ARM: &str = r##""api repos/acme/widgets/actions/variables?per_page=100") printf '{"total_count":2,"variables":[{"name":"VAR1","value":"value1","created_at":"2024-01-15T10:30:00Z","updated_at":"2024-02-01T08:00:00Z"},{"name":"VAR2","value":"value2"}]}\n' ;;
"##;
