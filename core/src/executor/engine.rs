use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;

use crate::discover::Target;
use crate::observe::RunObserver;
use crate::runner::{invoke_one, TaskOutcome};

use super::types::{ExecMode, ExecutionOpts, RunReport};

/// Drive the analyzer over `targets` and aggregate one [`TaskOutcome`] per
/// target into a [`RunReport`].
///
/// Every outcome is handed to `observer.task_finished` the moment it is
/// known, in both modes, so callers can log progress while the run is still
/// going. The observer's `run_finished` fires once, after the last outcome.
pub async fn run(
    targets: Vec<Target>,
    opts: &ExecutionOpts,
    observer: Arc<dyn RunObserver>,
) -> RunReport {
    let mut report = RunReport::new(targets.len());

    match opts.mode {
        ExecMode::Sequential => {
            for target in targets {
                observer.task_started(&target);
                let outcome =
                    invoke_one(&target, &opts.tool, opts.timeout, opts.capture_bytes).await;
                observer.task_finished(&outcome);
                report.record(outcome);
            }
        }
        ExecMode::Parallel => {
            run_parallel(targets, opts, &observer, &mut report).await;
        }
    }

    debug_assert_eq!(report.completed(), report.total);
    observer.run_finished(&report);
    report
}

/// Bounded worker pool: one spawned task per target, gated by a semaphore of
/// `max_workers` permits. Completions are drained in arrival order through a
/// `FuturesUnordered`; a worker that dies mid-flight (panic, cancellation)
/// still yields an outcome for its target instead of sinking the run.
async fn run_parallel(
    targets: Vec<Target>,
    opts: &ExecutionOpts,
    observer: &Arc<dyn RunObserver>,
    report: &mut RunReport,
) {
    let sem = Arc::new(Semaphore::new(opts.max_workers.max(1)));
    let mut futs = FuturesUnordered::new();

    for target in targets {
        let sem = sem.clone();
        let obs = observer.clone();
        let tool = opts.tool.clone();
        let timeout = opts.timeout;
        let capture_bytes = opts.capture_bytes;
        let task_target = target.clone();

        let handle = tokio::spawn(async move {
            let _permit = match sem.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    return TaskOutcome::launch_error(task_target, "worker pool closed");
                }
            };
            obs.task_started(&task_target);
            invoke_one(&task_target, &tool, timeout, capture_bytes).await
        });

        futs.push(async move { (target, handle.await) });
    }

    while let Some((target, joined)) = futs.next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => TaskOutcome::launch_error(target, format!("task failed: {e}")),
        };
        observer.task_finished(&outcome);
        report.record(outcome);
    }
}
