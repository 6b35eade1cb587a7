//! Core type definitions for copyjobs

mod entry;
mod error;
mod job;
mod outcome;

pub use entry::RawFileEntry;
pub use error::CopyError;
pub use job::CopyJob;
pub use outcome::{AbortReason, RunOutcome, RunStats};
