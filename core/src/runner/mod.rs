//! Single-target analyzer invocation: spawn, capture, timeout, outcome.

mod invoke;
pub mod types;

pub use invoke::invoke_one;
pub use types::{OutcomeKind, TaskOutcome};
