use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root of the generated markdown tree. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Group notes into one subfolder per first tag instead of front-matter tags.
    /// The `-t` flag turns this on for a single run.
    #[serde(default)]
    pub tag_folders: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self { output_dir: default_output_dir(), tag_folders: false }
    }
}

fn default_output_dir() -> String {
    "notes".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Config file the values came from, `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub tag_folders: bool,
    pub logging: LoggingConfig,
}
