//! Domain logic for the text-to-animation service.
//!
//! Everything here is free of HTTP concerns: code extraction, prompt
//! templating, subprocess management, and the render orchestrator that turns
//! generated source into a served video file.

pub mod extract;
pub mod prompt;
pub mod quality;
pub mod render;
pub mod scripting;
