//! Shared subprocess management utilities.
//!
//! Provides [`run_command`], which spawns a prepared
//! [`tokio::process::Command`], captures stdout/stderr, and waits for exit
//! (optionally bounded by a timeout).

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output exceeding this limit is truncated to prevent memory exhaustion
/// from extremely verbose tools.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Captured output from a finished process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured stdout (first [`MAX_OUTPUT_BYTES`]).
    pub stdout: String,
    /// Captured stderr (first [`MAX_OUTPUT_BYTES`]).
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Errors that prevent a process from producing a [`CommandOutput`].
#[derive(Debug, thiserror::Error)]
pub enum SubprocessError {
    /// The program could not be started (missing binary, permissions, ...).
    #[error("failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    /// Waiting on the running process failed.
    #[error("failed to wait for process: {0}")]
    Wait(#[source] std::io::Error),

    /// The process exceeded its timeout and was killed.
    #[error("process timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}

/// Spawn `cmd` as a child process, capture stdout/stderr, and wait for it.
///
/// With `timeout = None` the wait is unbounded. With a timeout, the child is
/// killed once it expires. stdin is closed so tools never block on input.
pub async fn run_command(
    cmd: &mut Command,
    timeout: Option<Duration>,
) -> Result<CommandOutput, SubprocessError> {
    // `kill_on_drop` is only enabled when a timeout is set: an unbounded wait
    // must outlive a dropped caller.
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(timeout.is_some());

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(SubprocessError::Spawn)?;

    // Read stdout/stderr in spawned tasks so we can still call `child.wait()`
    // (which borrows `&mut child`) without deadlocking on full pipes.
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    let status = match timeout {
        Some(limit) => {
            let waited = tokio::time::timeout(limit, child.wait()).await;
            match waited {
                Ok(result) => result.map_err(SubprocessError::Wait)?,
                Err(_elapsed) => {
                    let _ = child.kill().await;
                    return Err(SubprocessError::Timeout {
                        elapsed_ms: start.elapsed().as_millis() as u64,
                    });
                }
            }
        }
        None => child.wait().await.map_err(SubprocessError::Wait)?,
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    let stdout_bytes = stdout_task.await.unwrap_or_default();
    let stderr_bytes = stderr_task.await.unwrap_or_default();

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
        stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
        exit_code: status.code().unwrap_or(-1),
        duration_ms,
    })
}

/// Read an entire output stream, keeping the first [`MAX_OUTPUT_BYTES`].
///
/// Bytes past the cap are drained and discarded so the pipe stays open and
/// a verbose child never dies of SIGPIPE.
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
        let _ = tokio::io::copy(&mut h, &mut tokio::io::sink()).await;
    }
    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
