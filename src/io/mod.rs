//! Command-line handling, rendering, progress display and error types

/// Command-line interface and walk batch processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation, rendering and file operations
pub mod error;
/// PNG rendering of walks
pub mod image;
/// Terminal progress display for walk batches
pub mod progress;
/// Step-by-step GIF animation of walks
pub mod visualization;
