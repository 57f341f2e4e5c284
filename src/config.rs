use crate::error::{Result, SongrateError};
use crate::types::config::SongrateConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "songrate.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/songrate/config.toml";

/// Loads the global config, then `songrate.toml` from `cwd` (or `explicit`).
///
/// An explicit path must exist; the discovered files are optional.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<SongrateConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<SongrateConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SongrateError::ConfigNotFound(path.display().to_string()));
        }
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let local = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_FILE));
    merge_file_if_exists(&mut merged, &local)?;

    let cfg: SongrateConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SongrateError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::debug!(format = ?cfg.format(), pretty = cfg.pretty(), "config loaded");
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::info!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SongrateError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
