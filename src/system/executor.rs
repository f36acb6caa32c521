// src/system/executor.rs
//
// The executor is the only place commands actually run. It routes parsed
// input (builtin, Linux-translated, or direct Docker) to the right
// execution path and turns everything into an `ExecutionResult` or a
// `ShellError` with a definite exit code.

use crate::{
    constants::{EXIT_CODE_INTERRUPTED, SYNC_COMMAND_TIMEOUT},
    core::{
        locale::Locale,
        mapping::{MappingEngine, MappingError},
        parser::CommandParser,
    },
    models::{CommandMapping, ExecutionResult, ParsedCommand},
    system::stdin::StdinRouter,
    system::streaming::{self, SessionOptions, StreamingError, TerminationReason},
};
use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command;

/// Shells tried in order when entering a container.
const CONTAINER_SHELLS: &[&str] = &["/bin/bash", "/bin/sh", "/bin/ash"];

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(
        "Command '{command}' is not supported in Docker-only mode. \
         Use 'mapping search {command}' to look for a Docker equivalent."
    )]
    MappingNotFound { command: String },
    #[error("Docker is not available. Is the Docker daemon running?")]
    DockerUnavailable,
    #[error("Builtin command '{command}' is not available in this build.")]
    UnknownBuiltin { command: String },
    #[error("Container name required. Usage: cd <container>")]
    MissingContainerName,
    #[error("Container '{name}' not found.")]
    ContainerNotFound { name: String },
    #[error("Container '{name}' is not running.")]
    ContainerNotRunning { name: String },
    #[error("No usable shell found in container '{name}'.")]
    NoAvailableShell { name: String },
    #[error("Command '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command interrupted by user")]
    Interrupted,
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl ShellError {
    /// The process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => EXIT_CODE_INTERRUPTED,
            _ => 1,
        }
    }
}

impl From<StreamingError> for ShellError {
    fn from(err: StreamingError) -> Self {
        match err {
            StreamingError::EmptyCommand => Self::MappingNotFound {
                command: String::new(),
            },
            StreamingError::Spawn { command, source } => Self::Spawn { command, source },
        }
    }
}

/// Synchronous facade over the whole pipeline: parse, translate, execute.
/// Owns the async runtime so callers never touch tokio directly.
#[derive(Debug)]
pub struct ShellExecutor {
    parser: CommandParser,
    engine: MappingEngine,
    locale: Locale,
    dry_run: bool,
    runtime: tokio::runtime::Runtime,
    stdin: Option<Arc<StdinRouter>>,
}

impl ShellExecutor {
    pub fn new(
        data_path: impl Into<PathBuf>,
        locale: Locale,
        dry_run: bool,
    ) -> Result<Self, ShellError> {
        let mut engine = MappingEngine::new(data_path);
        engine.load()?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(ShellError::Runtime)?;
        Ok(Self {
            parser: CommandParser::new(),
            engine,
            locale,
            dry_run,
            runtime,
            stdin: None,
        })
    }

    /// Attaches the process-wide stdin router so streaming sessions can
    /// watch for the control vocabulary.
    pub fn attach_stdin_router(&mut self, router: Arc<StdinRouter>) {
        self.stdin = Some(router);
    }

    pub fn engine(&self) -> &MappingEngine {
        &self.engine
    }

    /// Runs one input line end to end. Rejections and launch failures are
    /// errors; a command that ran but exited non-zero is still an `Ok`
    /// result carrying that exit code.
    pub fn execute(&self, input: &str) -> Result<ExecutionResult, ShellError> {
        let Some(parsed) = self.parser.parse(input) else {
            return Ok(ExecutionResult::default());
        };

        // Dry-run short-circuits every other branch, builtins and
        // would-be rejections included.
        if self.dry_run {
            return Ok(self.render_dry_run(input, &parsed));
        }

        if parsed.is_builtin {
            return self.execute_builtin(&parsed);
        }

        let (argv, mapping) = self.translate(input, &parsed)?;
        log::debug!("'{input}' resolved to '{}'", argv.join(" "));

        if !self.is_docker_available() {
            return Err(ShellError::DockerUnavailable);
        }

        if let Some(m) = mapping.as_ref().filter(|m| m.category == "container-access") {
            let name = parsed
                .args
                .first()
                .ok_or(ShellError::MissingContainerName)?;
            return self.enter_container(name, m.clone());
        }

        if streaming::is_streaming_invocation(&argv) {
            return self.execute_streaming(argv, mapping);
        }
        self.execute_sync(argv, mapping)
    }

    /// Dry-run rendering: everything becomes a text line with exit 0 and
    /// nothing executes. Translation is still attempted so the line shows
    /// the resolved Docker invocation when one exists; input with no
    /// translation (builtins included) is echoed as typed.
    fn render_dry_run(&self, input: &str, parsed: &ParsedCommand) -> ExecutionResult {
        let (command_line, mapping) = match self.translate(input, parsed) {
            Ok((argv, mapping)) => (argv.join(" "), mapping),
            Err(_) => (input.trim().to_string(), None),
        };
        ExecutionResult {
            output: format!("Dry run: would execute '{command_line}'"),
            command: command_line,
            exit_code: 0,
            mapping,
            ..Default::default()
        }
    }

    /// Resolves input into a Docker argv. Docker verbs pass through with
    /// the `docker` prefix added when it was omitted; Linux commands go
    /// through the mapping set. A name in both vocabularies (like `ps` or
    /// `kill`) dispatches as Docker. Everything else is rejected.
    fn translate(
        &self,
        input: &str,
        parsed: &ParsedCommand,
    ) -> Result<(Vec<String>, Option<CommandMapping>), ShellError> {
        if parsed.is_docker {
            // Pass through verbatim so option order and shapes survive.
            let mut argv: Vec<String> =
                input.split_whitespace().map(str::to_string).collect();
            if argv.first().map(String::as_str) != Some("docker") {
                argv.insert(0, "docker".to_string());
            }
            return Ok((argv, None));
        }

        if parsed.is_linux {
            let mapping = self
                .engine
                .find_by_linux_command_with_options(&parsed.command, &parsed.options)
                .map_err(|_| ShellError::MappingNotFound {
                    command: parsed.command.clone(),
                })?;
            let mut argv: Vec<String> = mapping
                .docker_command
                .split_whitespace()
                .map(str::to_string)
                .collect();
            argv.extend(parsed.args.iter().cloned());
            return Ok((argv, Some(mapping.clone())));
        }

        Err(ShellError::MappingNotFound {
            command: parsed.command.clone(),
        })
    }

    // --- EXECUTION PATHS ---

    /// Captured, time-bounded execution for non-streaming invocations.
    fn execute_sync(
        &self,
        argv: Vec<String>,
        mapping: Option<CommandMapping>,
    ) -> Result<ExecutionResult, ShellError> {
        let command_line = argv.join(" ");
        let start = Instant::now();
        let Some((program, args)) = argv.split_first() else {
            return Ok(ExecutionResult::default());
        };

        let outcome = self.runtime.block_on(async {
            let future = Command::new(program).args(args).output();
            tokio::time::timeout(SYNC_COMMAND_TIMEOUT, future).await
        });

        match outcome {
            Ok(Ok(output)) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr);
                if !stderr.is_empty() {
                    text.push_str(&stderr);
                }
                let exit_code = output.status.code().unwrap_or(1);
                Ok(ExecutionResult {
                    command: command_line,
                    output: text,
                    error: String::new(),
                    exit_code,
                    duration: start.elapsed(),
                    mapping,
                })
            }
            Ok(Err(source)) => Err(ShellError::Spawn {
                command: command_line,
                source,
            }),
            Err(_) => Ok(ExecutionResult {
                error: format!(
                    "Command timed out after {}s",
                    SYNC_COMMAND_TIMEOUT.as_secs()
                ),
                command: command_line,
                exit_code: 124,
                duration: start.elapsed(),
                mapping,
                ..Default::default()
            }),
        }
    }

    /// Hands a streaming invocation to the session supervisor and folds its
    /// report back into the synchronous result model.
    fn execute_streaming(
        &self,
        argv: Vec<String>,
        mapping: Option<CommandMapping>,
    ) -> Result<ExecutionResult, ShellError> {
        // Control vocabulary only in interactive use; automated callers
        // cannot hang on it.
        let control = self
            .stdin
            .clone()
            .filter(|_| std::io::stdin().is_terminal());
        if control.is_some() {
            println!("Streaming... type 'exit' to stop, 'kill' to force, or press Ctrl+C.");
        }
        let options = SessionOptions {
            timeout: None,
            control,
        };

        let command_line = argv.join(" ");
        let report = self
            .runtime
            .block_on(streaming::run(&argv, &options))?;

        if report.reason == TerminationReason::Signal {
            return Err(ShellError::Interrupted);
        }
        let outcome = report.reason.outcome();
        Ok(ExecutionResult {
            command: command_line,
            output: outcome.message,
            error: String::new(),
            exit_code: outcome.exit_code,
            duration: report.duration,
            mapping,
        })
    }

    // --- CONTAINER ENTRY ---

    /// `cd <container>`: resolve the container by name, ID, or ID prefix,
    /// require it to be running, then open the first shell that exists
    /// inside it.
    fn enter_container(
        &self,
        name: &str,
        mapping: CommandMapping,
    ) -> Result<ExecutionResult, ShellError> {
        let start = Instant::now();
        let all = self.list_containers(true)?;
        let (id, resolved_name) =
            find_container(&all, name).ok_or_else(|| ShellError::ContainerNotFound {
                name: name.to_string(),
            })?;

        let running = self.list_containers(false)?;
        if find_container(&running, name).is_none() {
            return Err(ShellError::ContainerNotRunning {
                name: resolved_name,
            });
        }

        let shell = CONTAINER_SHELLS
            .iter()
            .copied()
            .find(|shell| self.shell_exists(&id, shell))
            .ok_or_else(|| ShellError::NoAvailableShell {
                name: resolved_name.clone(),
            })?;

        let command_line = format!("docker exec -it {resolved_name} {shell}");
        if !std::io::stdin().is_terminal() {
            // No terminal to attach; report what an interactive caller
            // would get instead of hanging.
            return Ok(ExecutionResult {
                output: format!(
                    "Would enter container '{resolved_name}' using {shell} (requires a terminal)"
                ),
                command: command_line,
                exit_code: 0,
                duration: start.elapsed(),
                mapping: Some(mapping),
                ..Default::default()
            });
        }

        let status = self.runtime.block_on(async {
            Command::new("docker")
                .args(["exec", "-it", id.as_str(), shell])
                .status()
                .await
        });
        match status {
            Ok(status) => Ok(ExecutionResult {
                output: format!("Left container '{resolved_name}'."),
                command: command_line,
                exit_code: status.code().unwrap_or(1),
                duration: start.elapsed(),
                mapping: Some(mapping),
                ..Default::default()
            }),
            Err(source) => Err(ShellError::Spawn {
                command: command_line,
                source,
            }),
        }
    }

    /// `docker ps` in `ID<TAB>NAME` form; `all` includes stopped containers.
    fn list_containers(&self, all: bool) -> Result<Vec<(String, String)>, ShellError> {
        let mut args = vec!["ps", "--format", "{{.ID}}\t{{.Names}}"];
        if all {
            args.insert(1, "-a");
        }
        let output = self
            .runtime
            .block_on(async { Command::new("docker").args(&args).output().await })
            .map_err(|source| ShellError::Spawn {
                command: format!("docker {}", args.join(" ")),
                source,
            })?;
        if !output.status.success() {
            return Err(ShellError::DockerUnavailable);
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(|line| {
                line.split_once('\t')
                    .map(|(id, name)| (id.to_string(), name.to_string()))
            })
            .collect())
    }

    fn shell_exists(&self, container_id: &str, shell: &str) -> bool {
        self.runtime
            .block_on(async {
                Command::new("docker")
                    .args(["exec", container_id, shell, "-c", "exit 0"])
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await
            })
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Probes the daemon with `docker version`. Deliberately uncached so a
    /// daemon restart is picked up on the next command.
    pub fn is_docker_available(&self) -> bool {
        self.runtime
            .block_on(async {
                Command::new("docker")
                    .arg("version")
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await
            })
            .map(|status| status.success())
            .unwrap_or(false)
    }

    // --- BUILTINS ---

    fn execute_builtin(&self, parsed: &ParsedCommand) -> Result<ExecutionResult, ShellError> {
        let start = Instant::now();
        let output = match parsed.command.as_str() {
            "help" => self.render_help(),
            "version" => format!("docksh {}", env!("CARGO_PKG_VERSION")),
            "lang" => format!("Current language: {}", self.locale.lang()),
            "clear" | "cls" => "\x1b[2J\x1b[H".to_string(),
            "mapping" => self.execute_mapping_builtin(parsed)?,
            "list" => self.render_mapping_list(parsed.args.first().map(String::as_str)),
            "search" => {
                let query = parsed.args.join(" ");
                self.render_mapping_search(&query)
            }
            other => {
                return Err(ShellError::UnknownBuiltin {
                    command: other.to_string(),
                });
            }
        };
        Ok(ExecutionResult {
            command: parsed.command.clone(),
            output,
            exit_code: 0,
            duration: start.elapsed(),
            ..Default::default()
        })
    }

    fn execute_mapping_builtin(&self, parsed: &ParsedCommand) -> Result<String, ShellError> {
        match parsed.args.first().map(String::as_str) {
            Some("list") => Ok(self.render_mapping_list(parsed.args.get(1).map(String::as_str))),
            None => Ok(self.render_mapping_list(None)),
            Some("search") => {
                let query = parsed.args.iter().skip(1).cloned().collect::<Vec<_>>();
                Ok(self.render_mapping_search(&query.join(" ")))
            }
            Some("show") => {
                let target = parsed.args.get(1).map(String::as_str).unwrap_or_default();
                self.render_mapping_show(target)
            }
            Some(other) => Err(ShellError::UnknownBuiltin {
                command: format!("mapping {other}"),
            }),
        }
    }

    fn render_help(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "docksh: a Docker-only command shell");
        let _ = writeln!(out);
        let _ = writeln!(out, "Linux-style commands are translated to Docker CLI calls.");
        let _ = writeln!(out, "Docker verbs run directly (with or without 'docker').");
        let _ = writeln!(out);
        let _ = writeln!(out, "Builtins:");
        let _ = writeln!(out, "  help                     Show this help");
        let _ = writeln!(out, "  version                  Show the shell version");
        let _ = writeln!(out, "  lang                     Show the active language");
        let _ = writeln!(out, "  mapping list             List all command mappings");
        let _ = writeln!(out, "  mapping search <query>   Search the mapping set");
        let _ = writeln!(out, "  mapping show <command>   Show one mapping in detail");
        let _ = writeln!(out, "  exit | quit              Leave the shell");
        out
    }

    /// Mappings grouped by category, optionally restricted to one.
    /// Categories and rows are sorted here, at the render boundary.
    fn render_mapping_list(&self, only: Option<&str>) -> String {
        let mut categories = self.engine.categories();
        categories.sort_unstable();
        if let Some(only) = only {
            categories.retain(|c| *c == only);
            if categories.is_empty() {
                return format!("No mappings in category '{only}'.");
            }
        }

        let mut out = String::new();
        for category in categories {
            let _ = writeln!(out, "[{category}]");
            let mut rows = self.engine.list_by_category(category);
            rows.sort_by(|a, b| a.linux_command.cmp(&b.linux_command));
            for mapping in rows {
                let _ = writeln!(
                    out,
                    "  {:<12} -> {:<28} {}",
                    mapping.linux_command,
                    mapping.docker_command,
                    self.locale.description(mapping)
                );
            }
        }
        out
    }

    fn render_mapping_search(&self, query: &str) -> String {
        if query.is_empty() {
            return "Usage: mapping search <query>".to_string();
        }
        let mut matches = self.engine.search(query);
        if matches.is_empty() {
            return format!("No mappings match '{query}'.");
        }
        matches.sort_by(|a, b| a.linux_command.cmp(&b.linux_command));

        let mut out = String::new();
        for mapping in matches {
            let _ = writeln!(
                out,
                "  {:<12} -> {:<28} {}",
                mapping.linux_command,
                mapping.docker_command,
                self.locale.description(mapping)
            );
        }
        out
    }

    fn render_mapping_show(&self, target: &str) -> Result<String, ShellError> {
        if target.is_empty() {
            return Ok("Usage: mapping show <command>".to_string());
        }
        let mapping = self
            .engine
            .find_by_linux_command(target)
            .or_else(|_| self.engine.find_by_docker_command(target))
            .map_err(|_| ShellError::MappingNotFound {
                command: target.to_string(),
            })?;

        let mut out = String::new();
        let _ = writeln!(out, "Linux command:  {}", mapping.linux_command);
        let _ = writeln!(out, "Docker command: {}", mapping.docker_command);
        let _ = writeln!(out, "Category:       {}", mapping.category);
        let _ = writeln!(out, "Description:    {}", self.locale.description(mapping));
        if !mapping.linux_example.is_empty() {
            let _ = writeln!(out, "Linux example:  {}", mapping.linux_example);
        }
        if !mapping.docker_example.is_empty() {
            let _ = writeln!(out, "Docker example: {}", mapping.docker_example);
        }
        for note in self.locale.notes(mapping) {
            let _ = writeln!(out, "Note:           {note}");
        }
        for warning in &mapping.warnings {
            let _ = writeln!(out, "Warning:        {warning}");
        }
        Ok(out)
    }
}

/// Resolves `needle` against `(id, name)` pairs by exact name, exact ID,
/// then ID prefix.
fn find_container(containers: &[(String, String)], needle: &str) -> Option<(String, String)> {
    if needle.is_empty() {
        return None;
    }
    containers
        .iter()
        .find(|(_, name)| name == needle)
        .or_else(|| containers.iter().find(|(id, _)| id == needle))
        .or_else(|| containers.iter().find(|(id, _)| id.starts_with(needle)))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor(dry_run: bool) -> ShellExecutor {
        ShellExecutor::new("nonexistent-data-dir", Locale::default(), dry_run).unwrap()
    }

    #[test]
    fn unmapped_command_is_rejected_with_guidance() {
        let exec = executor(false);
        let err = exec.execute("foobar").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        let message = err.to_string();
        assert!(message.contains("not supported in Docker-only mode"));
        assert!(message.contains("foobar"));
        assert!(message.contains("mapping search foobar"));
    }

    #[test]
    fn linux_command_without_a_mapping_is_rejected() {
        let exec = executor(false);
        // `mv` is in the Linux vocabulary but has no default mapping.
        let err = exec.execute("mv a b").unwrap_err();
        assert!(matches!(err, ShellError::MappingNotFound { .. }));
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let exec = executor(false);
        let result = exec.execute("   ").unwrap();
        assert!(result.command.is_empty());
        assert!(result.is_success());
    }

    #[test]
    fn dry_run_shows_the_translation_without_executing() {
        let exec = executor(true);
        let result = exec.execute("tail -f web-server").unwrap();
        assert_eq!(result.command, "docker logs -f web-server");
        assert!(result.output.contains("Dry run"));
        assert!(result.is_success());
        assert!(result.mapping.is_some());
    }

    #[test]
    fn dry_run_short_circuits_builtins_and_rejections() {
        let exec = executor(true);

        // A builtin is rendered, not run: no category listing appears.
        let builtin = exec.execute("mapping list").unwrap();
        assert!(builtin.output.starts_with("Dry run"));
        assert!(!builtin.output.contains('['));

        // Unmapped input is rendered with exit 0 instead of rejected.
        let unmapped = exec.execute("foobar --wat").unwrap();
        assert!(unmapped.is_success());
        assert!(unmapped.output.contains("foobar"));
    }

    #[test]
    fn dry_run_translates_plain_tail_to_plain_logs() {
        let exec = executor(true);
        let result = exec.execute("tail web-server").unwrap();
        assert_eq!(result.command, "docker logs web-server");
    }

    #[test]
    fn docker_verbs_pass_through_with_prefix_added() {
        let exec = executor(true);
        let result = exec.execute("images -a").unwrap();
        assert_eq!(result.command, "docker images -a");
        assert!(result.mapping.is_none());

        let result = exec.execute("docker ps -a").unwrap();
        assert_eq!(result.command, "docker ps -a");
    }

    #[test]
    fn shared_verbs_dispatch_as_docker_not_via_mapping() {
        let exec = executor(true);
        // `kill` is in both vocabularies; the Docker verb wins, so the
        // `kill -> docker stop` mapping does not apply.
        let result = exec.execute("kill mycontainer").unwrap();
        assert_eq!(result.command, "docker kill mycontainer");
        assert!(result.mapping.is_none());
    }

    #[test]
    fn docker_probe_is_idempotent() {
        let exec = executor(false);
        assert_eq!(exec.is_docker_available(), exec.is_docker_available());
    }

    #[test]
    fn builtins_answer_without_docker() {
        let exec = executor(false);
        assert!(exec.execute("help").unwrap().output.contains("mapping search"));
        assert!(exec.execute("version").unwrap().output.contains("docksh"));
        assert!(exec.execute("lang").unwrap().output.contains("en"));
    }

    #[test]
    fn mapping_builtin_lists_searches_and_shows() {
        let exec = executor(false);

        let list = exec.execute("mapping list").unwrap().output;
        assert!(list.contains("[logs-monitoring]"));
        assert!(list.contains("docker logs"));

        let filtered = exec.execute("mapping list logs-monitoring").unwrap().output;
        assert!(filtered.contains("docker logs"));
        assert!(!filtered.contains("docker images"));

        let search = exec.execute("mapping search memory").unwrap().output;
        assert!(search.contains("docker stats --no-stream"));

        let show = exec.execute("mapping show tail").unwrap().output;
        assert!(show.contains("Docker command: docker logs"));

        let err = exec.execute("mapping show nosuch").unwrap_err();
        assert!(matches!(err, ShellError::MappingNotFound { .. }));
    }

    #[test]
    fn unavailable_builtins_are_reported_as_such() {
        let exec = executor(false);
        let err = exec.execute("theme dark").unwrap_err();
        assert!(matches!(err, ShellError::UnknownBuiltin { .. }));
    }

    #[test]
    fn container_resolution_prefers_name_then_id_then_prefix() {
        let containers = vec![
            ("abc123def456".to_string(), "web-server".to_string()),
            ("abd999888777".to_string(), "db".to_string()),
        ];
        assert_eq!(
            find_container(&containers, "web-server").map(|(id, _)| id),
            Some("abc123def456".to_string())
        );
        assert_eq!(
            find_container(&containers, "abd999888777").map(|(_, name)| name),
            Some("db".to_string())
        );
        assert_eq!(
            find_container(&containers, "abd").map(|(_, name)| name),
            Some("db".to_string())
        );
        assert!(find_container(&containers, "nosuch").is_none());
        assert!(find_container(&containers, "").is_none());
    }

    // The remaining paths need a Docker daemon; they bail out early when
    // one is not present so the suite stays runnable anywhere.

    #[test]
    fn translated_command_executes_against_docker() {
        let exec = executor(false);
        if !exec.is_docker_available() {
            return;
        }
        let result = exec.execute("ls").unwrap();
        assert_eq!(result.command, "docker images");
        assert!(result.is_success());
        assert!(result.output.contains("REPOSITORY"));
    }

    #[test]
    fn missing_container_is_a_definite_error() {
        let exec = executor(false);
        if !exec.is_docker_available() {
            return;
        }
        let err = exec.execute("cd no-such-container-xyz").unwrap_err();
        assert!(matches!(err, ShellError::ContainerNotFound { .. }));
    }

    #[test]
    fn container_entry_requires_a_name() {
        let exec = executor(false);
        if !exec.is_docker_available() {
            return;
        }
        let err = exec.execute("cd").unwrap_err();
        assert!(matches!(err, ShellError::MissingContainerName));
    }
}
