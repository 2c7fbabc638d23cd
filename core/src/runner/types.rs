use std::time::Duration;

use crate::discover::Target;

/// Terminal classification of one analyzer invocation. Tagged so failures
/// travel as data across task boundaries instead of as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    Succeeded,
    /// The analyzer binary was not present when this task checked for it.
    ToolMissing,
    /// The wall-clock deadline expired and the analyzer was killed.
    Timeout,
    NonZeroExit,
    /// Spawning or awaiting the analyzer failed for an unexpected reason.
    LaunchError(String),
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::Succeeded => write!(f, "succeeded"),
            OutcomeKind::ToolMissing => write!(f, "analyzer missing"),
            OutcomeKind::Timeout => write!(f, "timed out"),
            OutcomeKind::NonZeroExit => write!(f, "nonzero exit"),
            OutcomeKind::LaunchError(msg) => write!(f, "launch error: {msg}"),
        }
    }
}

/// Result record for one target's invocation attempt. Created exactly once
/// per target, immutable thereafter.
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub target: Target,
    pub kind: OutcomeKind,
    /// Absent when the analyzer never ran to completion (missing tool,
    /// timeout, launch failure, or death by signal).
    pub exit_code: Option<i32>,
    /// Captured stdout tail, lossily decoded.
    pub stdout: String,
    /// Captured stderr tail, lossily decoded.
    pub stderr: String,
    /// Wall clock from just before spawn to termination or timeout.
    pub duration: Duration,
}

impl TaskOutcome {
    pub fn success(&self) -> bool {
        self.kind == OutcomeKind::Succeeded
    }

    pub(crate) fn launch_error(target: Target, message: impl Into<String>) -> Self {
        Self {
            target,
            kind: OutcomeKind::LaunchError(message.into()),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        }
    }
}
