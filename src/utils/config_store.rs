//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "cardview").ok_or_else(|| Error::Invalid {
        message: "could not find local data directory".to_string(),
    })?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a config file from the application data directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_from(&app_data_dir()?.join(filename))
}

/// Save a config file to the application data directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    save_to(&app_data_dir()?.join(filename), config)
}

/// Delete a config file
pub fn delete_config(filename: &str) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// Load a config file, TOML or JSON by extension; missing files load defaults
pub fn load_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config = if is_toml(path) {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(config)
}

/// Save a config file, TOML or JSON by extension
pub fn save_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    let content = if is_toml(path) {
        toml::to_string_pretty(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    fs::write(path, content)?;
    Ok(())
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
