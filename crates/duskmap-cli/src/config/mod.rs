//! Configuration management.
//!
//! This module provides configuration loading, the global verbose flag,
//! and the filter defaults applied when command-line flags are omitted.

mod defaults;

#[cfg(test)]
mod tests;

pub use defaults::FilterDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Forwards `log` records from duskmap-core to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[duskmap] {}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Log level for a `-v` count: off, debug, then trace.
pub fn log_level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Set the verbose flag and route library logging to stderr.
/// Only the first call installs the logger; later calls just adjust the level.
pub fn init_logging(verbosity: u8) {
    set_verbose(verbosity > 0);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log_level_for(verbosity));
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Environment variable that points at a config file.
const CONFIG_ENV_VAR: &str = "DUSKMAP_CONFIG";

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["duskmap.yml", "duskmap.yaml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: DuskmapConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(config: DuskmapConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DuskmapConfig {
    pub defaults: FilterDefaults,
}

impl DuskmapConfig {
    fn sanitize(mut self, warnings: &mut Vec<String>) -> Self {
        warnings.extend(self.defaults.sanitize());
        self
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Candidates are tried in order; files that are missing are skipped and
/// files that fail to read or parse add a warning before moving on.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in get_config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<DuskmapConfig>(&contents) {
                Ok(config) => {
                    let sanitized = config.sanitize(&mut warnings);
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle::with_config(sanitized, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config found; using built-in defaults.".to_string());
    ConfigHandle::with_config(DuskmapConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("duskmap").join(name));
        }
    }

    candidates
}

/// Default location written by `duskmap init`
pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::home_dir()
        .map(|home| home.join("duskmap").join(CONFIG_FILENAMES[0]))
        .ok_or_else(|| "Could not determine home directory".to_string())
}

static CONFIG_HANDLE: OnceLock<ConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Load the process-wide configuration. Only the first call's path is used.
pub fn init_config(custom_path: Option<&Path>) -> &'static ConfigHandle {
    CONFIG_HANDLE.get_or_init(|| load_config(custom_path))
}

/// Get the process-wide configuration, loading it from the default locations if needed.
pub fn config_handle() -> &'static ConfigHandle {
    init_config(None)
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[duskmap] Loaded config from {}", source.display());
        } else {
            eprintln!("[duskmap] Using built-in filter defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[duskmap] Config warning: {}", warning);
        }
    });
}
