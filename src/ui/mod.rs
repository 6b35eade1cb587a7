//! Terminal UI components

pub mod progress;

pub use progress::ProgressReporter;
