// src/tools/process.rs
// =============================================================================
// Running external recon tools without stalling the async runtime.
//
// tokio::process waits for the child asynchronously, so a slow tool only
// holds up the email it is working on. Arguments are handed to the OS as a
// list, never glued into a shell command line.
// =============================================================================

use crate::error::ReconError;
use crate::search::Email;
use std::path::{Path, PathBuf};
use tokio::process::Command;

// Runs `command args...` to completion
//
// `command` may carry its own leading arguments, split on whitespace, so
// "python3 /opt/theHarvester/theHarvester.py" works as well as a plain
// binary name.
//
// Returns Ok(()) only for a zero exit status. A missing binary becomes
// ToolSpawn, a non-zero exit becomes ToolFailed with the tail of stderr.
async fn run_tool(tool: &'static str, command: &str, args: &[String]) -> Result<(), ReconError> {
    // Step 1: split the configured command into program + leading arguments
    let mut words = command.split_whitespace();
    let program = words.next().ok_or_else(|| ReconError::ToolSpawn {
        tool,
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
    })?;

    tracing::debug!(tool, command, ?args, "starting external tool");

    // Step 2: spawn and wait without blocking a runtime thread
    // kill_on_drop means a cancelled run (Ctrl+C) takes the child down with it
    let output = Command::new(program)
        .args(words)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| ReconError::ToolSpawn { tool, source })?;

    // Step 3: only a clean exit counts
    if output.status.success() {
        tracing::debug!(tool, "external tool finished");
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(ReconError::ToolFailed {
        tool,
        status: output.status.to_string(),
        stderr: tail(stderr.trim(), 400).to_string(),
    })
}

// Runs a tool that writes its findings to `report`, then returns the report
//
// The report file is removed afterwards unless `keep` is set, whether the
// tool succeeded or not: a tool that dies halfway can leave a partial file.
pub async fn run_for_report(
    tool: &'static str,
    command: &str,
    args: &[String],
    report: &Path,
    keep: bool,
) -> Result<String, ReconError> {
    if let Err(e) = run_tool(tool, command, args).await {
        if !keep {
            discard_report(tool, report).await;
        }
        return Err(e);
    }

    read_report(tool, report, keep).await
}

// Builds a per-invocation report path such as
// "<work_dir>/userrecon-alice_40example_2ecom.txt"
//
// ASCII letters and digits are kept, every other byte becomes `_` followed by
// its two hex digits. The escape is reversible, so two different emails can
// never map to the same file and concurrent runs of one tool stay apart.
pub fn output_path(work_dir: &Path, tool: &str, email: &Email, extension: &str) -> PathBuf {
    let mut stem = String::with_capacity(email.as_str().len() * 2);
    for byte in email.as_str().bytes() {
        if byte.is_ascii_alphanumeric() {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{:02x}", byte));
        }
    }

    work_dir.join(format!("{}-{}.{}", tool, stem, extension))
}

/// Reads a tool report, removing the file afterwards unless asked to keep it
async fn read_report(tool: &'static str, path: &Path, keep: bool) -> Result<String, ReconError> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|source| ReconError::ToolOutput {
            tool,
            path: path.to_path_buf(),
            source,
        })?;

    if !keep {
        discard_report(tool, path).await;
    }

    // Tool reports are mostly UTF-8, but one stray byte shouldn't lose the rest
    Ok(String::from_utf8_lossy(&content).into_owned())
}

async fn discard_report(tool: &'static str, path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        // Nothing was written, nothing to clean up
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::debug!(tool, path = %path.display(), error = %e, "could not remove report"),
    }
}

// Last `max` bytes of a message, cut on a char boundary
fn tail(message: &str, max: usize) -> &str {
    if message.len() <= max {
        return message;
    }

    let mut start = message.len() - max;
    while !message.is_char_boundary(start) {
        start += 1;
    }
    &message[start..]
}
