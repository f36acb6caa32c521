// src/system/streaming.rs
//
// Streaming Docker subcommands (`logs -f`, `stats`, interactive `exec`,
// `attach`) never return on their own. The supervisor launches them in
// their own process group and races independent watchers for a single
// termination reason, so the shell stays responsive to OS interruption and
// the in-band "stop" vocabulary without ever leaking a child process.

use crate::{
    constants::{EMERGENCY_POLL_INTERVAL, EXIT_CODE_INTERRUPTED, SESSION_CEILING},
    system::process::{self, TerminationMethod},
    system::stdin::StdinRouter,
};
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::{mpsc, watch};

#[derive(Error, Debug)]
pub enum StreamingError {
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// The single winning event that ends a streaming session. Exactly one
/// reason is consumed per session; the first one produced wins the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// An interrupt/terminate-class OS signal arrived.
    Signal,
    /// The user typed `exit`, `quit`, or `q`.
    UserExit,
    /// The user typed `stop`.
    ManualStop,
    /// The user typed `kill`.
    ForceKill,
    /// The child exited on its own, carrying its status code when known.
    Completed(Option<i32>),
    /// The session's absolute timeout elapsed.
    TimedOut,
    /// The emergency watcher ended a session past the hard ceiling.
    AutoTerminated,
}

/// Human-readable outcome of a session, derived totally from the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub message: String,
    pub exit_code: i32,
}

impl TerminationReason {
    /// Maps every reason to exactly one outcome; there is no unhandled case.
    pub fn outcome(&self) -> SessionOutcome {
        let (message, exit_code) = match self {
            Self::Signal => ("Command interrupted by user".to_string(), EXIT_CODE_INTERRUPTED),
            Self::UserExit | Self::ManualStop => ("Streaming command stopped".to_string(), 0),
            Self::ForceKill => ("Streaming command force killed".to_string(), 137),
            Self::Completed(Some(0)) => ("Command completed normally".to_string(), 0),
            Self::Completed(Some(code)) => {
                (format!("Command exited with error (code {code})"), *code)
            }
            Self::Completed(None) => ("Command exited without a status code".to_string(), 1),
            Self::TimedOut => ("Command timed out".to_string(), 1),
            Self::AutoTerminated => {
                ("Command auto-terminated after exceeding the session ceiling".to_string(), 1)
            }
        };
        SessionOutcome { message, exit_code }
    }
}

/// Per-session knobs set by the call site.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Absolute timeout for the whole session, independent of the emergency
    /// watcher's cadence. `None` means no explicit limit.
    pub timeout: Option<Duration>,
    /// Line source for the in-band control vocabulary, shared with the
    /// interactive loop. `None` disables stdin control for the session.
    pub control: Option<Arc<StdinRouter>>,
}

/// What a finished session looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub reason: TerminationReason,
    pub method: TerminationMethod,
    pub duration: Duration,
}

/// Decides whether a resolved Docker invocation is streaming. Pure and
/// total: `logs` with `-f`/`--follow`, `attach` always, `exec` with
/// `-it`/`-i`/`-t`, and `stats` unless `--no-stream`.
pub fn is_streaming_invocation(argv: &[String]) -> bool {
    let mut parts = argv.iter().map(String::as_str);
    if parts.next() != Some("docker") {
        return false;
    }
    let Some(subcommand) = parts.next() else {
        return false;
    };
    match subcommand {
        "logs" => parts.any(|arg| arg == "-f" || arg == "--follow"),
        "attach" => true,
        "exec" => parts.any(|arg| arg == "-it" || arg == "-i" || arg == "-t"),
        "stats" => !parts.any(|arg| arg == "--no-stream"),
        _ => false,
    }
}

/// Matches one buffered stdin line against the control vocabulary.
pub fn control_action(line: &str) -> Option<TerminationReason> {
    let cleaned: String = line.chars().filter(|c| !c.is_control()).collect();
    match cleaned.trim().to_lowercase().as_str() {
        "exit" | "quit" | "q" => Some(TerminationReason::UserExit),
        "stop" => Some(TerminationReason::ManualStop),
        "kill" => Some(TerminationReason::ForceKill),
        _ => None,
    }
}

/// Runs one streaming invocation to completion, relaying its output and
/// racing the watcher set for a termination reason. Regardless of the
/// winning reason the same idempotent termination sequence runs.
pub async fn run(argv: &[String], options: &SessionOptions) -> Result<SessionReport, StreamingError> {
    let start = Instant::now();
    let (program, args) = argv.split_first().ok_or(StreamingError::EmptyCommand)?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    command.process_group(0);

    let mut child = command.spawn().map_err(|source| StreamingError::Spawn {
        command: argv.join(" "),
        source,
    })?;
    let pid = child.id().unwrap_or_default();
    log::debug!("Streaming session started: '{}' (pid {pid})", argv.join(" "));

    // Single-slot rendezvous: the first reason sent anywhere wins, later
    // senders fail harmlessly. The watch channel is the shared cancellation
    // signal every watcher selects on.
    let (reason_tx, mut reason_rx) = mpsc::channel::<TerminationReason>(1);
    let (cancel_tx, cancel_rx) = watch::channel(false);

    let out_relay = child.stdout.take().map(|stdout| {
        let cancel = cancel_rx.clone();
        tokio::spawn(relay_lines(stdout, cancel, false))
    });
    let err_relay = child.stderr.take().map(|stderr| {
        let cancel = cancel_rx.clone();
        tokio::spawn(relay_lines(stderr, cancel, true))
    });

    spawn_signal_watcher(reason_tx.clone(), cancel_rx.clone());
    if let Some(router) = options.control.clone() {
        spawn_control_watcher(router, reason_tx.clone(), cancel_rx.clone());
    }
    if let Some(timeout) = options.timeout {
        spawn_timeout_watcher(timeout, reason_tx.clone(), cancel_rx.clone());
    }
    spawn_emergency_watcher(pid, start, reason_tx.clone(), cancel_rx.clone());

    // The process-completion watcher is the race's home branch: it carries
    // the child's own status.
    let reason = tokio::select! {
        status = child.wait() => match status {
            Ok(status) => TerminationReason::Completed(status.code()),
            Err(e) => {
                log::warn!("Waiting on streaming child {pid} failed: {e}");
                TerminationReason::Completed(None)
            }
        },
        Some(reason) = reason_rx.recv() => reason,
    };

    // One reason is chosen; everyone else must observe cancellation and
    // stop without blocking.
    let _ = cancel_tx.send(true);
    log::debug!("Streaming session {pid} ending: {reason:?}");

    drop(child.stdin.take());
    let method = process::terminate(&mut child).await;

    // Relays end at pipe EOF once the child is gone; bound the wait anyway.
    for relay in [out_relay, err_relay].into_iter().flatten() {
        let _ = tokio::time::timeout(Duration::from_millis(200), relay).await;
    }

    Ok(SessionReport {
        reason,
        method,
        duration: start.elapsed(),
    })
}

async fn relay_lines(
    source: impl tokio::io::AsyncRead + Unpin,
    mut cancel: watch::Receiver<bool>,
    to_stderr: bool,
) {
    let mut lines = BufReader::new(source).lines();
    loop {
        tokio::select! {
            _ = cancel.changed() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if to_stderr {
                        eprintln!("{line}");
                    } else {
                        println!("{line}");
                    }
                }
                _ => break,
            },
        }
    }
}

/// One signal subscription covers the interrupt/terminate class; the
/// emergency watcher covers liveness. No redundant registrations.
fn spawn_signal_watcher(
    reason_tx: mpsc::Sender<TerminationReason>,
    mut cancel: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};
            let (Ok(mut interrupt), Ok(mut terminate)) =
                (signal(SignalKind::interrupt()), signal(SignalKind::terminate()))
            else {
                log::warn!("Could not install signal watcher for streaming session");
                return;
            };
            tokio::select! {
                _ = cancel.changed() => {}
                _ = interrupt.recv() => {
                    let _ = reason_tx.try_send(TerminationReason::Signal);
                }
                _ = terminate.recv() => {
                    let _ = reason_tx.try_send(TerminationReason::Signal);
                }
            }
        }
        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = cancel.changed() => {}
                _ = tokio::signal::ctrl_c() => {
                    let _ = reason_tx.try_send(TerminationReason::Signal);
                }
            }
        }
    });
}

/// Consumes routed stdin lines for the session's lifetime. On
/// cancellation the router is released with any requested-but-unread line
/// still queued for the next consumer.
fn spawn_control_watcher(
    router: Arc<StdinRouter>,
    reason_tx: mpsc::Sender<TerminationReason>,
    mut cancel: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.changed() => break,
                line = router.next_line() => match line {
                    Some(line) => {
                        if let Some(reason) = control_action(&line) {
                            let _ = reason_tx.try_send(reason);
                            break;
                        }
                    }
                    None => break,
                },
            }
        }
    });
}

fn spawn_timeout_watcher(
    timeout: Duration,
    reason_tx: mpsc::Sender<TerminationReason>,
    mut cancel: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.changed() => {}
            _ = tokio::time::sleep(timeout) => {
                let _ = reason_tx.try_send(TerminationReason::TimedOut);
            }
        }
    });
}

/// Coarse backstop: catches a child that exited without being reaped yet,
/// and auto-terminates sessions past the absolute ceiling.
fn spawn_emergency_watcher(
    pid: u32,
    start: Instant,
    reason_tx: mpsc::Sender<TerminationReason>,
    mut cancel: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EMERGENCY_POLL_INTERVAL);
        interval.tick().await; // first tick fires immediately
        loop {
            tokio::select! {
                _ = cancel.changed() => break,
                _ = interval.tick() => {
                    if pid != 0 && !process::is_alive(pid) {
                        let _ = reason_tx.try_send(TerminationReason::Completed(None));
                        break;
                    }
                    if start.elapsed() > SESSION_CEILING {
                        let _ = reason_tx.try_send(TerminationReason::AutoTerminated);
                        break;
                    }
                }
            }
        }
    });
}
