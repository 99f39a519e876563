use std::path::PathBuf;

use crate::config::default_config_path;

/// Commented config file written by `duskmap init`.
pub const CONFIG_TEMPLATE: &str = "\
# duskmap configuration
#
# Searched in order: --config, $DUSKMAP_CONFIG, ./config/duskmap.yml,
# ./duskmap.yml, ~/duskmap/duskmap.yml. Command-line flags win over
# these defaults.

defaults:
  # light or dark
  mode: dark
  # Percentages, 100 = unchanged (0-200)
  brightness: 100
  contrast: 100
  # Percentages, 0 = none (0-100)
  grayscale: 0
  sepia: 0
";

/// Write a default configuration file.
///
/// Writes to `~/duskmap/duskmap.yml` unless `path` is given. Safe to run
/// multiple times - won't overwrite an existing file unless `force` is true.
pub fn cmd_init(path: Option<PathBuf>, force: bool) -> Result<(), String> {
    let config_path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };

    if config_path.exists() && !force {
        println!(
            "Skipped: {} (already exists, use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .map_err(|e| format!("Failed to write {}: {}", config_path.display(), e))?;
    println!("Wrote: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, DuskmapConfig};

    #[test]
    fn test_template_matches_builtin_defaults() {
        let config: DuskmapConfig = serde_yaml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, DuskmapConfig::default());
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("duskmap.yml");

        cmd_init(Some(path.clone()), false).unwrap();
        assert!(path.is_file());

        let handle = load_config(Some(&path));
        assert!(handle.source.is_some(), "warnings: {:?}", handle.warnings);
        assert_eq!(handle.config, DuskmapConfig::default());
    }

    #[test]
    fn test_init_respects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duskmap.yml");
        std::fs::write(&path, "defaults:\n  sepia: 40\n").unwrap();

        cmd_init(Some(path.clone()), false).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "defaults:\n  sepia: 40\n"
        );

        cmd_init(Some(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
