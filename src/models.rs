// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// --- PARSED INPUT MODEL ---

/// One tokenized input line, produced by the parser and discarded after a
/// single execution.
#[derive(Debug, Clone, Default)]
pub struct ParsedCommand {
    pub command: String,
    /// Positional arguments, in input order.
    pub args: Vec<String>,
    /// Options by name. Boolean flags are stored with the sentinel value
    /// `"true"`.
    pub options: HashMap<String, String>,
    pub is_builtin: bool,
    pub is_linux: bool,
    pub is_docker: bool,
}

// --- MAPPING DATA FILE MODELS ---

/// A single Linux-to-Docker command translation record.
///
/// `linux_command` is expected to be unique across the loaded set, but the
/// resolver tolerates duplicates: the first record in load order wins.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommandMapping {
    pub id: String,
    pub linux_command: String,
    pub docker_command: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub linux_example: String,
    #[serde(default)]
    pub docker_example: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub localized_description: HashMap<String, String>,
    #[serde(default)]
    pub localized_notes: HashMap<String, Vec<String>>,
}

/// Top-level structure of `mappings.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct MappingsFile {
    #[serde(default)]
    pub mappings: Vec<CommandMapping>,
}

// --- EXECUTION RESULT MODEL ---

/// The immutable outcome of one executed (or dry-run) command.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// The command line that ran (or would run, for dry runs).
    pub command: String,
    /// Captured combined stdout+stderr for synchronous calls; a short
    /// outcome line for streaming sessions.
    pub output: String,
    /// Single-line error text, empty on success.
    pub error: String,
    pub exit_code: i32,
    pub duration: Duration,
    /// The mapping that produced this invocation, when one was used.
    pub mapping: Option<CommandMapping>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
