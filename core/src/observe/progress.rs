use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::discover::Target;
use crate::executor::RunReport;
use crate::runner::TaskOutcome;

use super::{RunObserver, TracingObserver};

/// Observer that layers live progress bars over the tracing log: an overall
/// bar sized at discovery time plus a spinner per in-flight target. Disabled
/// instances delegate straight to [`TracingObserver`], which keeps the CLI
/// wiring uniform for non-TTY runs.
pub struct ProgressObserver {
    log: TracingObserver,
    multi: MultiProgress,
    overall: Mutex<Option<ProgressBar>>,
    spinners: Mutex<HashMap<String, ProgressBar>>,
    enabled: bool,
}

impl ProgressObserver {
    pub fn new(enabled: bool) -> Self {
        Self {
            log: TracingObserver,
            multi: MultiProgress::new(),
            overall: Mutex::new(None),
            spinners: Mutex::new(HashMap::new()),
            enabled,
        }
    }
}

impl RunObserver for ProgressObserver {
    fn discovery_started(&self, root: &Path) {
        self.log.discovery_started(root);
    }

    fn target_found(&self, target: &Target) {
        self.log.target_found(target);
    }

    fn targets_discovered(&self, count: usize) {
        self.log.targets_discovered(count);
        if !self.enabled {
            return;
        }

        let bar = self.multi.add(ProgressBar::new(count as u64));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} projects {msg}")
                .unwrap()
                .progress_chars("█▓▒░  "),
        );
        *self.overall.lock().unwrap() = Some(bar);
    }

    fn task_started(&self, target: &Target) {
        if !self.enabled {
            self.log.task_started(target);
            return;
        }

        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(target.name.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.spinners
            .lock()
            .unwrap()
            .insert(target.name.clone(), bar);
    }

    fn task_finished(&self, outcome: &TaskOutcome) {
        self.log.task_finished(outcome);
        if !self.enabled {
            return;
        }

        if let Some(bar) = self.spinners.lock().unwrap().remove(&outcome.target.name) {
            let icon = if outcome.success() { "✅" } else { "❌" };
            bar.finish_with_message(format!(
                "{} {} ({:.2}s)",
                icon,
                outcome.target.name,
                outcome.duration.as_secs_f64()
            ));
        }
        if let Some(overall) = self.overall.lock().unwrap().as_ref() {
            overall.inc(1);
        }
    }

    fn run_finished(&self, report: &RunReport) {
        if self.enabled {
            for (_, bar) in self.spinners.lock().unwrap().drain() {
                bar.finish_and_clear();
            }
            if let Some(overall) = self.overall.lock().unwrap().take() {
                let msg = if report.all_succeeded() {
                    "all projects passed"
                } else {
                    "some projects failed"
                };
                overall.finish_with_message(msg);
            }
        }
        self.log.run_finished(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    use crate::runner::OutcomeKind;

    fn target(name: &str) -> Target {
        Target {
            path: PathBuf::from("/tmp").join(name),
            name: name.to_string(),
        }
    }

    #[test]
    fn disabled_observer_does_not_panic() {
        let obs = ProgressObserver::new(false);
        obs.targets_discovered(1);
        obs.task_started(&target("native1"));
        obs.task_finished(&TaskOutcome {
            target: target("native1"),
            kind: OutcomeKind::Succeeded,
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::from_millis(5),
        });
        obs.run_finished(&RunReport::new(1));
    }

    #[test]
    fn enabled_observer_tracks_spinner_lifecycle() {
        let obs = ProgressObserver::new(true);
        obs.targets_discovered(2);
        obs.task_started(&target("native1"));
        assert_eq!(obs.spinners.lock().unwrap().len(), 1);

        obs.task_finished(&TaskOutcome {
            target: target("native1"),
            kind: OutcomeKind::NonZeroExit,
            exit_code: Some(1),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::from_millis(5),
        });
        assert!(obs.spinners.lock().unwrap().is_empty());
    }
}
