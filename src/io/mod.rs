/// Command-line interface and run orchestration
pub mod cli;
/// Board, animation and output defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG snapshot export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Animated GIF replay of output sequences
pub mod visualization;
