//! Result of a complete copy run

/// How a run ended.
///
/// A run that reaches the copy phase always completes, even when
/// individual jobs fail. Aborts happen before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The copy phase ran to the end of the job list
    Completed(RunStats),
    /// The run stopped before copying anything
    Aborted(AbortReason),
}

/// Why a run stopped without copying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The configuration file could not be read
    ConfigNotFound,
    /// The configuration file was not parseable XML
    ConfigMalformed,
    /// No entry survived validation, or the config listed none
    EmptyJobSet,
}

/// Counters accumulated over the copy phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Jobs that entered the copy phase
    pub total_jobs: usize,
    /// Jobs whose file arrived at the destination
    pub copied: usize,
    /// Jobs whose copy returned an error
    pub failed: usize,
}
