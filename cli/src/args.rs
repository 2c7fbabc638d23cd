use std::path::PathBuf;

use clap::Parser;
use svf_batch_core::config::AppConfig;
use svf_batch_core::ExecMode;

#[derive(Parser, Debug, Default)]
#[command(
    name = "svf-batch",
    version,
    about = "Run the NAPI SVF analyzer over every native* project under a base path"
)]
pub struct Args {
    /// Base path scanned for native* project folders.
    #[arg(long)]
    pub base_path: Option<String>,

    /// Path to the SVF analyzer binary.
    #[arg(long)]
    pub tool: Option<String>,

    /// Analyze projects concurrently instead of one at a time.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Worker-pool size in parallel mode.
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Per-project timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// List the projects that would be analyzed, then exit without running.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Disable progress bars.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Explicit config file (overrides the default lookup).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Fold CLI flags over the loaded config. Flags win over config files and
/// environment overrides.
pub fn apply_overrides(cfg: &mut AppConfig, args: &Args) {
    if let Some(base_path) = &args.base_path {
        cfg.base_path = base_path.clone();
    }
    if let Some(tool) = &args.tool {
        cfg.tool = tool.clone();
    }
    if args.parallel {
        cfg.mode = ExecMode::Parallel;
    }
    if let Some(jobs) = args.jobs {
        cfg.max_workers = jobs.max(1);
    }
    if let Some(timeout) = args.timeout {
        cfg.timeout_secs = timeout;
    }
}
