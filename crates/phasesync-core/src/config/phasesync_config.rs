//! Top-level PhaseSync configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ReportConfig, ScanConfig, SymbolMapConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PHASESYNC_*`)
/// 3. Project config (`phasesync.toml` in project root)
/// 4. User config (`~/.phasesync/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PhaseSyncConfig {
    pub scan: ScanConfig,
    pub symbol_map: SymbolMapConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
    pub scan_extensions: Vec<String>,
    pub symbol_map_path: Option<PathBuf>,
    pub report_scan_tags: Option<bool>,
    pub report_generate_prompt: Option<bool>,
}

impl PhaseSyncConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PhaseSyncConfig) -> Result<(), ConfigError> {
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config
            .scan
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "scan.extensions".to_string(),
                message: "entries must be non-empty".to_string(),
            });
        }
        if let Some(ref path) = config.symbol_map.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "symbol_map.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.phasesync/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PhaseSyncConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PhaseSyncConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value (or a non-empty list).
    fn merge(base: &mut PhaseSyncConfig, other: &PhaseSyncConfig) {
        // Scan
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if !other.scan.extensions.is_empty() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        // Symbol map
        if other.symbol_map.path.is_some() {
            base.symbol_map.path = other.symbol_map.path.clone();
        }

        // Report
        if other.report.scan_tags.is_some() {
            base.report.scan_tags = other.report.scan_tags;
        }
        if other.report.generate_prompt.is_some() {
            base.report.generate_prompt = other.report.generate_prompt;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PHASESYNC_SCAN_MAX_FILE_SIZE`, `PHASESYNC_SYMBOL_MAP_PATH`, etc.
    fn apply_env_overrides(config: &mut PhaseSyncConfig) {
        if let Ok(val) = std::env::var("PHASESYNC_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PHASESYNC_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PHASESYNC_SCAN_EXTENSIONS") {
            let extensions: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from)
                .collect();
            if !extensions.is_empty() {
                config.scan.extensions = extensions;
            }
        }
        if let Ok(val) = std::env::var("PHASESYNC_SYMBOL_MAP_PATH") {
            if !val.is_empty() {
                config.symbol_map.path = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var("PHASESYNC_REPORT_SCAN_TAGS") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.scan_tags = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PHASESYNC_REPORT_GENERATE_PROMPT") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.generate_prompt = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PhaseSyncConfig, cli: &CliOverrides) {
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
        if !cli.scan_extensions.is_empty() {
            config.scan.extensions = cli.scan_extensions.clone();
        }
        if let Some(ref v) = cli.symbol_map_path {
            config.symbol_map.path = Some(v.clone());
        }
        if let Some(v) = cli.report_scan_tags {
            config.report.scan_tags = Some(v);
        }
        if let Some(v) = cli.report_generate_prompt {
            config.report.generate_prompt = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
