//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolved filesystem locations for one service instance.
#[derive(Debug, Clone)]
pub struct ServicePaths {
    /// Folder holding the database and (by default) the dictionary archive
    pub root_folder: PathBuf,
    /// SQLite database file backing the quiz pool
    pub database_path: PathBuf,
    /// Zipped dictionary export consumed by search and seeding
    pub archive_path: PathBuf,
}

/// Resolve all service paths from an optional CLI root folder and an
/// optional archive override.
///
/// The root folder is created if missing; the archive is not required to
/// exist at resolution time.
pub fn resolve_paths(
    cli_root: Option<&Path>,
    cli_archive: Option<&Path>,
) -> Result<ServicePaths> {
    let root_folder = resolve_root_folder(cli_root, "CHOQUIZ_ROOT_FOLDER")?;
    std::fs::create_dir_all(&root_folder)?;

    let database_path = root_folder.join("choquiz.db");
    let archive_path = match cli_archive {
        Some(path) => path.to_path_buf(),
        None => root_folder.join("dict.zip"),
    };

    Ok(ServicePaths {
        root_folder,
        database_path,
        archive_path,
    })
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(root_folder));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_root_folder())
}

/// Locate the configuration file for the platform
fn find_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("choquiz").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/choquiz/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("choquiz"))
        .unwrap_or_else(|| PathBuf::from("./choquiz_data"))
}
