use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Default svf-batch data directory: ~/.svf-batch
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".svf-batch"))
}

/// Load configuration from an explicit TOML file.
pub fn load_from(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
    let mut cfg: AppConfig = toml::from_str(&s)?;
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// Load configuration with the default precedence:
/// `~/.svf-batch/config.toml`, then `./svf-batch.toml`, then built-ins.
/// Environment variables override whatever the files said.
pub fn load_default() -> anyhow::Result<AppConfig> {
    let home_config = data_dir()?.join("config.toml");
    let local_config = Path::new("svf-batch.toml");

    let mut cfg: AppConfig = if home_config.exists() {
        let s = std::fs::read_to_string(&home_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };

    // Default the log directory into the data dir so plain runs keep their
    // history in one place.
    if cfg
        .logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .is_none()
    {
        let logs_dir = data_dir()?.join("logs");
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(v) = std::env::var("SVF_BATCH_BASE_PATH") {
        if !v.trim().is_empty() {
            cfg.base_path = v;
        }
    }
    if let Ok(v) = std::env::var("SVF_BATCH_TOOL") {
        if !v.trim().is_empty() {
            cfg.tool = v;
        }
    }
}
