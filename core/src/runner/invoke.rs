use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::discover::Target;
use crate::util::TailBuf;

use super::types::{OutcomeKind, TaskOutcome};

/// Invoke the analyzer once for `target` and fold every failure path into the
/// returned [`TaskOutcome`]. This function never errors; a broken tool path,
/// a spawn failure, a timeout, or a nonzero exit all come back as data so the
/// surrounding run keeps going.
///
/// The tool-existence probe runs per task, uncached, since the analyzer is a
/// shared artifact that can disappear between invocations.
pub async fn invoke_one(
    target: &Target,
    tool: &Path,
    timeout: Duration,
    capture_bytes: usize,
) -> TaskOutcome {
    let started = Instant::now();

    if !tool.is_file() {
        return finish(target, OutcomeKind::ToolMissing, None, None, None, started);
    }

    let mut cmd = Command::new(tool);
    cmd.arg(&target.path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            return finish(
                target,
                OutcomeKind::LaunchError(format!("spawn failed: {e}")),
                None,
                None,
                None,
                started,
            )
        }
    };

    let Some(stdout) = child.stdout.take() else {
        return finish(
            target,
            OutcomeKind::LaunchError("no stdout pipe".into()),
            None,
            None,
            None,
            started,
        );
    };
    let Some(stderr) = child.stderr.take() else {
        return finish(
            target,
            OutcomeKind::LaunchError("no stderr pipe".into()),
            None,
            None,
            None,
            started,
        );
    };

    let out_buf = TailBuf::new(capture_bytes);
    let err_buf = TailBuf::new(capture_bytes);
    let out_task = pump(stdout, out_buf.clone());
    let err_task = pump(stderr, err_buf.clone());

    let (kind, exit_code) = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => {
            let code = status.code();
            if status.success() {
                (OutcomeKind::Succeeded, code)
            } else {
                // Death by signal reports no code; still a failed run.
                (OutcomeKind::NonZeroExit, code)
            }
        }
        Ok(Err(e)) => (OutcomeKind::LaunchError(format!("wait failed: {e}")), None),
        Err(_elapsed) => {
            let _ = child.start_kill();
            let _ = child.wait().await;
            (OutcomeKind::Timeout, None)
        }
    };

    // The child is gone either way, so the pipes are at EOF and the pumps
    // drain whatever remains before returning.
    out_task.await.ok();
    err_task.await.ok();

    finish(
        target,
        kind,
        exit_code,
        Some(out_buf),
        Some(err_buf),
        started,
    )
}

fn pump<R>(mut rd: R, buf: TailBuf) -> JoinHandle<()>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut chunk = vec![0u8; 8 * 1024];
        loop {
            match rd.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.push(&chunk[..n]),
            }
        }
    })
}

fn finish(
    target: &Target,
    kind: OutcomeKind,
    exit_code: Option<i32>,
    out_buf: Option<TailBuf>,
    err_buf: Option<TailBuf>,
    started: Instant,
) -> TaskOutcome {
    TaskOutcome {
        target: target.clone(),
        kind,
        exit_code,
        stdout: out_buf.map(|b| b.to_string_lossy()).unwrap_or_default(),
        stderr: err_buf.map(|b| b.to_string_lossy()).unwrap_or_default(),
        duration: started.elapsed(),
    }
}
