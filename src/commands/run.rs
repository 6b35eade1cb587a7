//! The run command: load the manifest, validate entries, copy files

use crate::config::Config;
use crate::executor;
use crate::logger::RunLog;
use crate::manifest;
use crate::types::{AbortReason, CopyError, RunOutcome, RunStats};
use crate::ui::ProgressReporter;
use crate::validate;

/// Execute a full copy run against the configured manifest.
///
/// Manifest faults and an empty job list abort the run before any file
/// is touched. Once copying starts, a failing job is counted and the
/// run moves on to the next one.
pub fn run(config: &Config, log: &RunLog) -> RunOutcome {
    log.info("Copying started");

    let entries = match manifest::load(&config.manifest, log) {
        Ok(entries) => entries,
        Err(CopyError::ConfigMalformed { .. }) => {
            return abort(log, AbortReason::ConfigMalformed)
        }
        Err(_) => return abort(log, AbortReason::ConfigNotFound),
    };

    let jobs = validate::validate_entries(&entries, log);
    if jobs.is_empty() {
        log.error(&format!(
            "Config has no files to copy - {}",
            config.manifest.display()
        ));
        return abort(log, AbortReason::EmptyJobSet);
    }

    let mut stats = RunStats {
        total_jobs: jobs.len(),
        ..Default::default()
    };

    let reporter = ProgressReporter::new(jobs.len());
    if let Some(bar) = reporter.bar() {
        log.attach_progress(bar);
    }

    for (index, job) in jobs.iter().enumerate() {
        reporter.tick(index, &format!("Copying - {}", job.name));

        match executor::copy_job(job, log) {
            Ok(_) => stats.copied += 1,
            Err(_) => stats.failed += 1,
        }
    }

    reporter.finish();
    log.detach_progress();

    log.info(&format!(
        "Copying completed: {} copied, {} failed",
        stats.copied, stats.failed
    ));

    RunOutcome::Completed(stats)
}

fn abort(log: &RunLog, reason: AbortReason) -> RunOutcome {
    log.info("Nothing to copy");
    RunOutcome::Aborted(reason)
}
