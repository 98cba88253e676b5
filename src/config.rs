//! Configuration handling for cpm.
//! This module locates, loads, and parses the configuration file that declares
//! scaffold types, static replacement pairs, and per-type directory structures.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Template file name → output file name, in declaration order.
pub type FolderFiles = IndexMap<String, String>;

/// Folder path → file mappings. A folder mapped to `null` only gets its
/// directories created.
pub type Structure = IndexMap<String, Option<FolderFiles>>;

/// The scaffolding configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Type id → slash-delimited parameter names, e.g. `"name/subname"`
    pub types: IndexMap<String, String>,

    /// Token → literal value, merged into every replacement table
    #[serde(default, deserialize_with = "deserialize_scalar_pairs")]
    pub static_replace_pairs: IndexMap<String, String>,

    /// Type id → directory structure
    pub structure: IndexMap<String, Structure>,

    /// Template root, relative to the project directory
    pub dir_file_templates: PathBuf,

    /// Output root, relative to the project directory. Must already exist.
    pub dir_destination: PathBuf,
}

/// Reads static replacement pairs, accepting any scalar as the value.
///
/// Numbers and `true` keep their text form; `null`, `false`, and zero are falsy
/// and become the empty string.
fn deserialize_scalar_pairs<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde_json::Value;

    IndexMap::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(token, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Bool(true) => "true".to_string(),
                Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
                Value::Null | Value::Bool(false) | Value::Number(_) => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(D::Error::custom(format!(
                        "static replacement \"{token}\" must be a string, number or boolean"
                    )))
                }
            };
            Ok((token, value))
        })
        .collect()
}

impl Config {
    /// Returns the declared value template of `type_id`.
    ///
    /// # Errors
    /// * `Error::UnknownType` if the type is not declared in `types`
    pub fn type_template(&self, type_id: &str) -> Result<&str> {
        self.types
            .get(type_id)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownType { type_id: type_id.to_string() })
    }

    /// Returns the directory structure declared for `type_id`.
    ///
    /// # Errors
    /// * `Error::MissingStructure` if `structure` has no entry for the type
    pub fn type_structure(&self, type_id: &str) -> Result<&Structure> {
        self.structure
            .get(type_id)
            .ok_or_else(|| Error::MissingStructure { type_id: type_id.to_string() })
    }

    /// Declared type ids in configuration order.
    pub fn type_ids(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }
}

/// Locates the configuration file.
///
/// # Arguments
/// * `explicit` - Path given on the command line, used as is when present
/// * `search_dirs` - Directories searched in order for one of `CONFIG_FILES`
///
/// # Errors
/// * `Error::ConfigNotFound` if no candidate exists
pub fn find_config(explicit: Option<&Path>, search_dirs: &[PathBuf]) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::ConfigNotFound {
            config_file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            searched: path.display().to_string(),
        });
    }

    for dir in search_dirs {
        for file in CONFIG_FILES {
            let config_path = dir.join(file);
            if config_path.is_file() {
                return Ok(config_path);
            }
            debug!("No configuration at {}", config_path.display());
        }
    }

    Err(Error::ConfigNotFound {
        config_file: CONFIG_FILES[0].to_string(),
        searched: search_dirs
            .iter()
            .map(|dir| dir.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Reads the raw configuration content.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<String> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());
    Ok(std::fs::read_to_string(config_path)?)
}

/// Configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Parses configuration content.
///
/// # Errors
/// * `Error::JsonError` / `Error::YamlError` if the content does not match the schema
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    let config: Config = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(config)
}

/// Loads and parses the configuration file at `config_path`.
pub fn get_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    let content = load_config(config_path)?;
    let config = parse_config(&content, ConfigFormat::from_path(config_path))?;
    debug!(
        "Loaded {} type(s): {}",
        config.types.len(),
        config.type_ids().join(", ")
    );
    Ok(config)
}
