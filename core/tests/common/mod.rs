#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use svf_batch_core::{discover, ExecMode, ExecutionOpts, NoopObserver, Target};

/// Write an executable shell script into `dir` and return its path. The
/// script body sees the target path as `$1`.
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Create `native*` project directories under `root` and discover them.
pub fn make_targets(root: &Path, names: &[&str]) -> Vec<Target> {
    for name in names {
        std::fs::create_dir(root.join(name)).unwrap();
    }
    discover(root, &NoopObserver).unwrap()
}

pub fn opts(tool: PathBuf, mode: ExecMode) -> ExecutionOpts {
    ExecutionOpts {
        tool,
        mode,
        timeout: Duration::from_secs(10),
        max_workers: 4,
        capture_bytes: 65536,
    }
}

pub fn failed_names(report: &svf_batch_core::RunReport) -> Vec<String> {
    let mut names: Vec<String> = report
        .failed
        .iter()
        .map(|o| o.target.name.clone())
        .collect();
    names.sort_unstable();
    names
}
