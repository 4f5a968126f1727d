use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dotenv::dotenv;
use log::info;

use crate::config::{Config, Settings, CONFIG_FILE_NAME};
use crate::error::WebhookError;

const DEFAULT_DATA_DIR: &str = "config";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub fn load_settings() -> Settings {
    dotenv().ok();

    let config_path = env::var("WEBHOOK_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let data_dir =
                env::var("WEBHOOK_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
            default_config_path(data_dir)
        });

    let http_timeout = env::var("WEBHOOK_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|secs| secs.parse().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

    Settings {
        config_path,
        http_timeout: Duration::from_secs(http_timeout),
    }
}

pub fn default_config_path<P: AsRef<Path>>(data_dir: P) -> PathBuf {
    data_dir.as_ref().join("mods").join(CONFIG_FILE_NAME)
}

/// Writes the default properties file unless one is already there.
///
/// Returns `true` when a new file was created.
pub fn ensure_config_file<P: AsRef<Path>>(path: P) -> Result<bool, WebhookError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WebhookError::config_io(parent, e))?;
    }
    fs::write(path, Config::default_properties()).map_err(|e| WebhookError::config_io(path, e))?;

    info!("Created default settings file at {}", path.display());
    Ok(true)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, WebhookError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| WebhookError::config_io(path, e))?;
    Ok(Config::from_properties(&contents))
}
