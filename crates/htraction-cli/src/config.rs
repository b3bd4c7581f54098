use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use htraction_report::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.htraction.cli";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtractionConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where the local store and submissions live. `None` means the
    /// platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Added in v1.
    #[serde(default)]
    pub log_format: LogFormat,
    /// Thesis configuration file; the built-in default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesis_file: Option<PathBuf>,
    /// Extra canned chat replies merged after the built-in ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_responses_file: Option<PathBuf>,
    #[serde(default)]
    pub report_styles: DocumentStyles,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for HtractionConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            log_format: LogFormat::default(),
            thesis_file: None,
            chat_responses_file: None,
            report_styles: DocumentStyles::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl HtractionConfig {
    /// The configured data directory, else the platform default.
    pub fn resolved_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// A config as read from disk, with the migrations that ran on the way in.
/// Loading happens before logging is set up, so callers report them.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: HtractionConfig,
    pub migrations: Vec<&'static str>,
}

pub fn read_config(path: &Path) -> eyre::Result<LoadedConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let (migrated, migrations) = migrate(json, on_disk_version)?;
    let config: HtractionConfig = serde_json::from_value(migrated)?;
    Ok(LoadedConfig { config, migrations })
}

pub fn load_config(path: &Path) -> eyre::Result<HtractionConfig> {
    Ok(read_config(path)?.config)
}

/// The config at `path`, or defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<LoadedConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(LoadedConfig {
            config: HtractionConfig::default(),
            migrations: Vec::new(),
        })
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value; the returned
/// list names the steps that ran.
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> eyre::Result<(serde_json::Value, Vec<&'static str>)> {
    let mut applied = Vec::new();

    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update htraction."
        ));
    }

    // v0 → v1: add log_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("log_format")
            .or_insert(serde_json::Value::String("text".to_string()));
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        applied.push("v0 → v1 (added log_format)");
    }

    Ok((json, applied))
}

pub fn save_config(path: &Path, config: &HtractionConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
