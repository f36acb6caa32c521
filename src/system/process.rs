// src/system/process.rs

use crate::constants::{KILL_GRACE, TERM_GRACE};
use std::time::Duration;
use tokio::process::Child;

/// Which step of the termination sequence ended the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationMethod {
    /// The child had already exited before any signal was sent.
    AlreadyExited,
    /// The child exited within the SIGTERM grace window.
    Term,
    /// The child survived SIGTERM and was force-killed.
    Kill,
}

#[cfg(unix)]
mod imp {
    use nix::sys::signal::{Signal, kill, killpg};
    use nix::unistd::Pid;

    /// Sends `sig` to the process group led by `pid`. The child must have
    /// been spawned with `process_group(0)` for the group to exist.
    pub fn signal_group(pid: u32, sig: Signal) -> nix::Result<()> {
        killpg(Pid::from_raw(pid as i32), sig)
    }

    pub fn signal_process(pid: u32, sig: Signal) -> nix::Result<()> {
        kill(Pid::from_raw(pid as i32), sig)
    }

    /// Liveness probe via signal 0: no signal is delivered, only existence
    /// and permission are checked.
    pub fn is_alive(pid: u32) -> bool {
        kill(Pid::from_raw(pid as i32), None).is_ok()
    }

    /// SIGTERM to the group, falling back to the bare process when group
    /// delivery fails (e.g. the group never formed).
    pub fn terminate_gracefully(pid: u32) {
        if let Err(e) = signal_group(pid, Signal::SIGTERM) {
            log::debug!("killpg(SIGTERM) failed for {pid}: {e}, signaling process directly");
            let _ = signal_process(pid, Signal::SIGTERM);
        }
    }

    pub fn kill_forcefully(pid: u32) {
        if let Err(e) = signal_group(pid, Signal::SIGKILL) {
            log::debug!("killpg(SIGKILL) failed for {pid}: {e}, signaling process directly");
            let _ = signal_process(pid, Signal::SIGKILL);
        }
    }
}

#[cfg(not(unix))]
mod imp {
    /// No portable liveness probe here: report the child as alive and let
    /// the completion watcher detect its exit.
    pub fn is_alive(_pid: u32) -> bool {
        true
    }

    pub fn terminate_gracefully(_pid: u32) {}

    pub fn kill_forcefully(_pid: u32) {}
}

pub use imp::is_alive;

/// Runs the graceful-then-forceful termination sequence against a child and
/// reaps it. Idempotent: signaling an already-exited process is not an
/// error. SIGTERM always precedes SIGKILL, and SIGKILL is skipped when the
/// child exits inside the SIGTERM grace window.
pub async fn terminate(child: &mut Child) -> TerminationMethod {
    if matches!(child.try_wait(), Ok(Some(_))) {
        return TerminationMethod::AlreadyExited;
    }

    let Some(pid) = child.id() else {
        return TerminationMethod::AlreadyExited;
    };

    imp::terminate_gracefully(pid);
    if wait_with_deadline(child, TERM_GRACE).await {
        return TerminationMethod::Term;
    }

    imp::kill_forcefully(pid);
    if !wait_with_deadline(child, KILL_GRACE).await {
        // Last resort: let the runtime deliver the kill to the bare process.
        if let Err(e) = child.start_kill() {
            log::warn!("Failed to kill child process {pid}: {e}");
        }
        let _ = child.wait().await;
    }
    TerminationMethod::Kill
}

/// Polls `try_wait` in short sleeps so the wait stays cancellable, returning
/// true when the child exits before the deadline.
async fn wait_with_deadline(child: &mut Child, deadline: Duration) -> bool {
    let poll = Duration::from_millis(10);
    let mut elapsed = Duration::ZERO;
    loop {
        if matches!(child.try_wait(), Ok(Some(_))) {
            return true;
        }
        if elapsed >= deadline {
            return false;
        }
        tokio::time::sleep(poll).await;
        elapsed += poll;
    }
}

#[cfg(all(test, not(unix)))]
mod fallback_tests {
    use super::*;

    // A `false` here would make a liveness poller declare every running
    // child dead on its first tick.
    #[test]
    fn liveness_fallback_assumes_alive() {
        assert!(is_alive(1));
        assert!(is_alive(u32::MAX));
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tokio::process::Command;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn sigterm_suffices_for_a_cooperative_child() {
        runtime().block_on(async {
            let mut child = Command::new("sleep")
                .arg("30")
                .process_group(0)
                .spawn()
                .unwrap();
            let method = terminate(&mut child).await;
            assert_eq!(method, TerminationMethod::Term);
        });
    }

    #[test]
    fn sigkill_is_used_only_when_sigterm_is_ignored() {
        runtime().block_on(async {
            let mut child = Command::new("sh")
                .args(["-c", "trap '' TERM; sleep 30"])
                .process_group(0)
                .spawn()
                .unwrap();
            // Give the shell a moment to install the trap.
            tokio::time::sleep(Duration::from_millis(200)).await;
            let method = terminate(&mut child).await;
            assert_eq!(method, TerminationMethod::Kill);
        });
    }

    #[test]
    fn terminating_an_exited_child_is_not_an_error() {
        runtime().block_on(async {
            let mut child = Command::new("true").spawn().unwrap();
            child.wait().await.unwrap();
            let method = terminate(&mut child).await;
            assert_eq!(method, TerminationMethod::AlreadyExited);
        });
    }

    #[test]
    fn liveness_probe_tracks_process_state() {
        runtime().block_on(async {
            let mut child = Command::new("sleep").arg("30").spawn().unwrap();
            let pid = child.id().unwrap();
            assert!(is_alive(pid));
            child.start_kill().unwrap();
            child.wait().await.unwrap();
            assert!(!is_alive(pid));
        });
    }
}
