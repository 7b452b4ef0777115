//! Subprocess management for external tools.
//!
//! Pure process plumbing with no knowledge of what is being run; the render
//! orchestrator builds the command and interprets the result.

pub mod subprocess;
