use crate::domain::constants::{
    DEFAULT_INPUTS_DIR, DEFAULT_INPUT_FILE, DEFAULT_LOG_LEVEL, DEFAULT_REPORT_COUNT,
    DEFAULT_SAFE_PROBABILITY,
};
use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SettingsFile {
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub inputs_dir: PathBuf,
    pub default_input: String,
    pub default_count: usize,
    pub safe_probability: f64,
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from(DEFAULT_INPUTS_DIR),
            default_input: DEFAULT_INPUT_FILE.to_string(),
            default_count: DEFAULT_REPORT_COUNT,
            safe_probability: DEFAULT_SAFE_PROBABILITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// `$HOME/.config/rednose/config.toml`, when `HOME` is set.
pub fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/rednose/config.toml"))
}

pub fn load_settings() -> Result<SettingsFile, AppError> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(SettingsFile::default()),
    }
}

pub fn load_settings_from(path: &Path) -> Result<SettingsFile, AppError> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let settings: SettingsFile = toml::from_str(&raw).map_err(|e| AppError::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    let p = settings.general.safe_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(AppError::Config {
            path: path.to_path_buf(),
            message: format!("safe_probability must be between 0 and 1, got {p}"),
        });
    }
    if settings.general.default_count == 0 {
        return Err(AppError::Config {
            path: path.to_path_buf(),
            message: "default_count must be a positive integer".to_string(),
        });
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let s = load_settings_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(s, SettingsFile::default());
        assert_eq!(s.general.default_input, "input.txt");
        assert_eq!(s.general.default_count, 20);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[general]\nsafe_probability = 0.8\ninputs_dir = \"data\"\n").unwrap();
        let s = load_settings_from(&path).unwrap();
        assert_eq!(s.general.safe_probability, 0.8);
        assert_eq!(s.general.inputs_dir, PathBuf::from("data"));
        assert_eq!(s.general.default_count, 20);
    }

    #[test]
    fn out_of_range_probability_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[general]\nsafe_probability = 1.5\n").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[general\n").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(AppError::Config { .. })
        ));
    }
}
