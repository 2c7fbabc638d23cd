use serde::{Deserialize, Serialize};

use crate::executor::ExecMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory scanned for `native*` project folders.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Path to the SVF analyzer binary.
    #[serde(default = "default_tool")]
    pub tool: String,

    #[serde(default)]
    pub mode: ExecMode,

    /// Hard per-project deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Worker-pool size in parallel mode.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Per-stream output capture cap in bytes.
    #[serde(default = "default_capture_bytes")]
    pub capture_bytes: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_path() -> String {
    "napi_project/HarmonyXFlowBench".to_string()
}

fn default_tool() -> String {
    "./src/napi_svf_tool".to_string()
}

fn default_timeout_secs() -> u64 {
    3600
}

fn default_max_workers() -> usize {
    4
}

fn default_capture_bytes() -> usize {
    65536
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            tool: default_tool(),
            mode: ExecMode::default(),
            timeout_secs: default_timeout_secs(),
            max_workers: default_max_workers(),
            capture_bytes: default_capture_bytes(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "svf_batch_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.base_path, "napi_project/HarmonyXFlowBench");
        assert_eq!(cfg.tool, "./src/napi_svf_tool");
        assert_eq!(cfg.mode, ExecMode::Sequential);
        assert_eq!(cfg.timeout_secs, 3600);
        assert_eq!(cfg.max_workers, 4);
        assert_eq!(cfg.capture_bytes, 65536);
        assert!(cfg.logging.enabled);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            mode = "parallel"
            timeout_secs = 60

            [logging]
            level = "debug"
            file = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.mode, ExecMode::Parallel);
        assert_eq!(cfg.timeout_secs, 60);
        assert_eq!(cfg.max_workers, 4);
        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.logging.file);
        assert!(cfg.logging.console);
    }
}
