//! Core engine for batch NAPI SVF analysis: project discovery, per-project
//! analyzer invocation, and run orchestration.
//!
//! The crate is split along the run pipeline:
//!
//! ```text
//! discover::discover()            -> Vec<Target>
//!   ↓
//! executor::run()                 -> RunReport
//!   ↓ (per target)
//! runner::invoke_one()            -> TaskOutcome
//! ```
//!
//! All run-time reporting goes through the [`observe::RunObserver`] seam so
//! callers decide how discovery and task events are surfaced.

pub mod config;
pub mod discover;
pub mod error;
pub mod executor;
pub mod observe;
pub mod runner;
pub mod util;

pub use discover::{discover, Target, TARGET_PREFIX};
pub use error::{CliError, DiscoveryError};
pub use executor::{run, ExecMode, ExecutionOpts, RunReport};
pub use observe::{NoopObserver, RunObserver, TracingObserver};
pub use runner::{invoke_one, OutcomeKind, TaskOutcome};
