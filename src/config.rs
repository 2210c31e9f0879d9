use crate::error::{Result, ScoreError};
use crate::types::config::AppConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "baseline.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/baseline-score/config.toml";

/// Loads `explicit` when given, otherwise the global file overlaid with
/// `./baseline.toml`. Missing layered files fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ScoreError::ConfigNotFound(path.display().to_string()));
        }
        return load_layers(&[path.to_path_buf()]);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let mut layers = Vec::new();
    layers.extend(global);
    layers.push(PathBuf::from(DEFAULT_CONFIG_FILE));
    load_layers(&layers)
}

pub(crate) fn load_layers(paths: &[PathBuf]) -> Result<AppConfig> {
    let mut merged = Value::Table(Map::new());
    for path in paths {
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: AppConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
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
