// src/system/stdin.rs
//
// Exactly one reader owns the process's stdin. Lines are read on demand
// and handed to one consumer at a time, so the interactive loop and a
// streaming session's control watcher never compete for input, and a
// finished session cannot swallow the next prompt line.

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, mpsc};

#[derive(Debug)]
pub struct StdinRouter {
    request_tx: mpsc::UnboundedSender<()>,
    lines: Mutex<mpsc::UnboundedReceiver<String>>,
    outstanding: AtomicBool,
}

impl StdinRouter {
    /// Router backed by the real stdin. The reader thread only touches
    /// the descriptor when a line has been requested, so child processes
    /// that inherit stdin (interactive `docker exec`) keep it to
    /// themselves.
    pub fn spawn() -> Arc<Self> {
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<()>();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            while request_rx.blocking_recv().is_some() {
                let mut line = String::new();
                match stdin.lock().read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        let line = line.trim_end_matches(['\r', '\n']).to_string();
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Arc::new(Self {
            request_tx,
            lines: Mutex::new(line_rx),
            outstanding: AtomicBool::new(false),
        })
    }

    /// Router fed by an explicit sender instead of the real stdin.
    pub fn channel() -> (mpsc::UnboundedSender<String>, Arc<Self>) {
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        let (request_tx, _) = mpsc::unbounded_channel();
        (
            line_tx,
            Arc::new(Self {
                request_tx,
                lines: Mutex::new(line_rx),
                outstanding: AtomicBool::new(false),
            }),
        )
    }

    /// Next line for async consumers; `None` once stdin closes. Dropping
    /// the future mid-wait leaves the requested line in the channel for
    /// the next consumer instead of losing it.
    pub async fn next_line(&self) -> Option<String> {
        self.request();
        let line = self.lines.lock().await.recv().await;
        self.consumed(line.as_ref());
        line
    }

    /// Next line for synchronous consumers outside the async runtime.
    pub fn next_line_blocking(&self) -> Option<String> {
        self.request();
        let line = self.lines.blocking_lock().blocking_recv();
        self.consumed(line.as_ref());
        line
    }

    /// At most one read request is outstanding at a time. A request left
    /// over from a cancelled consumer is reused by the next one.
    fn request(&self) {
        if !self.outstanding.swap(true, Ordering::SeqCst) {
            let _ = self.request_tx.send(());
        }
    }

    fn consumed(&self, line: Option<&String>) {
        if line.is_some() {
            self.outstanding.store(false, Ordering::SeqCst);
        }
    }
}
