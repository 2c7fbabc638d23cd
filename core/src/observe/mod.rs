//! Run observation seam. Discovery and the orchestrator report through an
//! injected [`RunObserver`] instead of logging directly, so the CLI decides
//! how events surface (tracing lines, progress bars, test counters).

mod progress;

use std::path::Path;

use crate::discover::Target;
use crate::executor::RunReport;
use crate::runner::{OutcomeKind, TaskOutcome};

pub use progress::ProgressObserver;

/// Hooks fired over the lifetime of one run. All hooks default to no-ops;
/// implementations override what they care about. `task_started` and
/// `task_finished` may fire from worker tasks concurrently.
pub trait RunObserver: Send + Sync {
    fn discovery_started(&self, _root: &Path) {}
    fn target_found(&self, _target: &Target) {}
    fn targets_discovered(&self, _count: usize) {}
    fn task_started(&self, _target: &Target) {}
    fn task_finished(&self, _outcome: &TaskOutcome) {}
    fn run_finished(&self, _report: &RunReport) {}
}

/// Observer that ignores everything. Handy for tests and library callers
/// that only want the returned report.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Production observer: emits the run log through `tracing`, mirroring what
/// the analyzer driver is expected to surface for each discovery event, task
/// start/end, and the final summary block.
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn discovery_started(&self, root: &Path) {
        tracing::info!(root = %root.display(), "scanning for native projects");
    }

    fn target_found(&self, target: &Target) {
        tracing::info!(project = %target.name, "found project");
    }

    fn targets_discovered(&self, count: usize) {
        tracing::info!(count, "discovery finished");
    }

    fn task_started(&self, target: &Target) {
        tracing::info!(project = %target.name, path = %target.path.display(), "analysis started");
    }

    fn task_finished(&self, outcome: &TaskOutcome) {
        if !outcome.stdout.is_empty() {
            tracing::info!(project = %outcome.target.name, "analyzer stdout:\n{}", outcome.stdout);
        }
        if !outcome.stderr.is_empty() {
            tracing::warn!(project = %outcome.target.name, "analyzer stderr:\n{}", outcome.stderr);
        }

        let secs = outcome.duration.as_secs_f64();
        match &outcome.kind {
            OutcomeKind::Succeeded => {
                tracing::info!(
                    project = %outcome.target.name,
                    "analysis succeeded in {secs:.2}s"
                );
            }
            kind => {
                tracing::error!(
                    project = %outcome.target.name,
                    exit_code = ?outcome.exit_code,
                    "analysis failed after {secs:.2}s: {kind}"
                );
            }
        }
    }

    fn run_finished(&self, report: &RunReport) {
        tracing::info!("==================================================");
        tracing::info!(
            total = report.total,
            succeeded = report.succeeded,
            failed = report.failed.len(),
            "analysis run complete"
        );
        if !report.failed.is_empty() {
            for outcome in &report.failed {
                tracing::info!("failed: {} ({})", outcome.target.name, outcome.kind);
            }
        }
        tracing::info!("==================================================");
    }
}
