//! Fenced code block extraction from LLM output.

use std::sync::LazyLock;

use regex::Regex;

/// Regex pattern matching a ```` ```python ```` fenced block.
///
/// Non-greedy and dot-matches-newline, so the body may span many lines and
/// stops at the first closing fence.
const PYTHON_BLOCK_PATTERN: &str = r"(?s)```python\n(.*?)```";

/// Compiled regex for python block extraction. Compiled once, reused forever.
static PYTHON_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PYTHON_BLOCK_PATTERN).expect("valid regex"));

/// Extract the body of the first ```` ```python ```` fenced block in `text`.
///
/// The returned slice excludes both fence markers. Returns `None` when no
/// complete block is present.
pub fn extract_python_code(text: &str) -> Option<&str> {
    PYTHON_BLOCK_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
