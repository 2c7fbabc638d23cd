//! Run orchestrator: drives the analyzer over every discovered target.
//!
//! Two execution modes share one aggregation path:
//! - sequential: one target at a time, in discovery order
//! - parallel: a bounded worker pool (tokio tasks gated by a semaphore),
//!   outcomes collected in completion order
//!
//! Mode affects wall-clock time and completion order only; the finalized
//! [`RunReport`] content is identical for a fixed analyzer behavior.

mod engine;
pub mod types;

pub use engine::run;
pub use types::{ExecMode, ExecutionOpts, RunReport};
