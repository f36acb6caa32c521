// src/constants.rs

use std::time::Duration;

/// The name of the directory holding mapping data, relative to the executable
/// (falling back to the current directory when absent).
pub const DATA_DIR: &str = "data";

/// The name of the mapping data file (inside the data directory).
pub const MAPPINGS_FILENAME: &str = "mappings.toml";

/// Bound on synchronous (non-streaming) Docker invocations.
pub const SYNC_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Grace period after SIGTERM before escalating to SIGKILL.
pub const TERM_GRACE: Duration = Duration::from_millis(200);

/// Grace period after SIGKILL before falling back to a direct kill.
pub const KILL_GRACE: Duration = Duration::from_millis(100);

/// Cadence of the emergency liveness watcher on streaming sessions.
pub const EMERGENCY_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Absolute ceiling on any streaming session before auto-termination.
pub const SESSION_CEILING: Duration = Duration::from_secs(3600);

/// Maximum number of command suggestions returned for completion.
pub const MAX_SUGGESTIONS: usize = 10;

/// Exit code reported when a streaming session is interrupted by the user.
pub const EXIT_CODE_INTERRUPTED: i32 = 130;
