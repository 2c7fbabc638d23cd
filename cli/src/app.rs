//! CLI assembly: pick an observer, run discovery, honor dry-run, then hand
//! the target list to the orchestrator and map the report to an exit code.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use svf_batch_core::config::AppConfig;
use svf_batch_core::observe::ProgressObserver;
use svf_batch_core::{discover, run, CliError, ExecutionOpts, RunObserver, TracingObserver};

use crate::args::Args;

pub async fn run_app(args: &Args, cfg: &AppConfig) -> Result<i32, CliError> {
    // Progress bars only make sense for a live interactive run.
    let observer: Arc<dyn RunObserver> = if args.quiet || args.dry_run {
        Arc::new(TracingObserver)
    } else {
        Arc::new(ProgressObserver::new(atty::is(atty::Stream::Stderr)))
    };

    let base = Path::new(&cfg.base_path);
    let targets = discover(base, observer.as_ref())?;

    if targets.is_empty() {
        tracing::warn!(base = %base.display(), "no native projects found, nothing to do");
        return Ok(0);
    }

    if args.dry_run {
        tracing::info!("dry run: {} projects would be analyzed", targets.len());
        for target in &targets {
            tracing::info!("  - {}", target.name);
        }
        return Ok(0);
    }

    let opts = ExecutionOpts {
        tool: PathBuf::from(&cfg.tool),
        mode: cfg.mode,
        timeout: Duration::from_secs(cfg.timeout_secs),
        max_workers: cfg.max_workers,
        capture_bytes: cfg.capture_bytes,
    };

    let report = run(targets, &opts, observer).await;
    Ok(if report.all_succeeded() { 0 } else { 1 })
}
