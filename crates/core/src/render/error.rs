use std::path::PathBuf;

/// Every way a render can fail. Each stage has its own variant so callers
/// can report the specific cause.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The generated output contained no usable code block.
    #[error("no code block found in generated output")]
    MissingCode,

    /// The script file could not be written.
    #[error("failed to write script {}: {source}", .path.display())]
    ScriptWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The renderer could not be started or waited on.
    #[error("failed to run renderer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The renderer exited with a non-zero status.
    #[error("renderer exited with code {exit_code}: {}", diagnostics(.stderr, .stdout))]
    ProcessFailed {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// The renderer exceeded the configured timeout and was killed.
    #[error("renderer timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// The renderer succeeded but the video is not where it should be.
    #[error("renderer finished but no video was produced at {}", .path.display())]
    OutputMissing { path: PathBuf },

    /// The output location could not be inspected (permissions, a file
    /// where a directory should be, ...).
    #[error("failed to inspect renderer output at {}: {source}", .path.display())]
    OutputCheck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The produced video could not be moved into the static directory.
    #[error("failed to move video from {} to {}: {source}", .from.display(), .to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Most diagnostic text carried into an error message, in bytes.
pub const MAX_DIAGNOSTIC_BYTES: usize = 4 * 1024;

/// Prefer stderr; fall back to stdout when the tool reports errors there.
/// Only the last [`MAX_DIAGNOSTIC_BYTES`] are kept, where tracebacks end.
fn diagnostics<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    let stderr = stderr.trim();
    let text = if stderr.is_empty() { stdout.trim() } else { stderr };
    tail(text, MAX_DIAGNOSTIC_BYTES)
}

/// Last `max` bytes of `text`, moved forward to a char boundary.
fn tail(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut start = text.len() - max;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}
