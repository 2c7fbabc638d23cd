use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::runner::TaskOutcome;

/// How targets are dispatched to the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    #[default]
    Sequential,
    Parallel,
}

/// Knobs for one orchestrated run.
#[derive(Debug, Clone)]
pub struct ExecutionOpts {
    /// Path to the analyzer binary.
    pub tool: PathBuf,
    pub mode: ExecMode,
    /// Hard wall-clock deadline per target.
    pub timeout: Duration,
    /// Worker-pool size under [`ExecMode::Parallel`].
    pub max_workers: usize,
    /// Per-stream capture cap in bytes.
    pub capture_bytes: usize,
}

/// Aggregate over all task outcomes of one run. Built incrementally as
/// outcomes arrive, finalized once every submitted target has reported.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub total: usize,
    pub succeeded: usize,
    /// Outcomes of every failed target, in completion order.
    pub failed: Vec<TaskOutcome>,
}

impl RunReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            succeeded: 0,
            failed: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: TaskOutcome) {
        if outcome.success() {
            self.succeeded += 1;
        } else {
            self.failed.push(outcome);
        }
    }

    /// Number of targets that have produced an outcome so far.
    pub fn completed(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}
