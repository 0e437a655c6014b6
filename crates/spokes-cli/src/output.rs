//! Shared output layer for human/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputOpts`] and formats its
//! output accordingly: sectioned text for humans, or stable JSON (one
//! object per result) for scripts and dashboards. Error payloads carry
//! the core's stable `E####` codes so machine callers can branch without
//! parsing prose.

use std::fmt::Display;

use serde::Serialize;
use serde_json::json;

use spokes_core::NetworkError;

/// Width of the horizontal separators in human output.
pub const RULE_WIDTH: usize = 64;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-oriented sectioned text.
    Human,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Rendering options threaded through every command handler.
#[derive(Debug, Clone, Copy)]
pub struct OutputOpts {
    /// Selected output mode.
    pub mode: OutputMode,
    /// Suppress non-essential human output (breakdowns, hints).
    pub quiet: bool,
}

/// Print a horizontal separator.
pub fn rule() {
    println!("{:-<width$}", "", width = RULE_WIDTH);
}

/// Print a section heading followed by a separator.
pub fn section(heading: &str) {
    println!("{heading}");
    rule();
}

/// Print a left-aligned key/value line.
pub fn kv(key: &str, value: impl Display) {
    println!("{:<22} {value}", format!("{key}:"));
}

/// Emit `value` as pretty JSON, or run the human renderer.
///
/// # Errors
///
/// Fails only if JSON serialization fails, which for the facade's plain
/// record types would indicate a bug.
pub fn emit<T: Serialize>(
    opts: OutputOpts,
    value: &T,
    human: impl FnOnce(),
) -> anyhow::Result<()> {
    if opts.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human();
    }
    Ok(())
}

/// Render a core error for the selected mode and convert it for
/// propagation.
///
/// JSON mode puts a structured error object on stdout (the stream
/// machine callers watch); human mode surfaces the remediation hint on
/// stderr. The process exit status comes from the returned error either
/// way.
pub fn failure(err: NetworkError, opts: OutputOpts) -> anyhow::Error {
    if opts.mode.is_json() {
        let payload = json!({
            "error": {
                "code": err.code(),
                "message": err.to_string(),
                "hint": err.hint(),
            }
        });
        println!("{payload}");
    } else if !opts.quiet
        && let Some(hint) = err.hint()
    {
        eprintln!("hint: {hint}");
    }
    anyhow::Error::new(err)
}
