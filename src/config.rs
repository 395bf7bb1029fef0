use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".bitmxrc.json";

/// Extensions treated as monolingual text files when scanning a directory.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".en", ".fr", ".es", ".de", ".it", ".ru", ".ar", ".jp", ".ko", ".pt", ".nl", ".sv", ".txt",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: BTreeSet<String>,
}

fn default_extensions() -> BTreeSet<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every extension must start with a dot and must not contain whitespace
    /// or path separators.
    pub fn validate(&self) -> Result<()> {
        for ext in &self.extensions {
            validate_extension(ext)
                .with_context(|| format!("Invalid entry in 'extensions': \"{}\"", ext))?;
        }
        Ok(())
    }

    /// The configured extensions plus `extra`.
    pub fn extensions_with(&self, extra: &[String]) -> Result<BTreeSet<String>> {
        let mut extensions = self.extensions.clone();
        for ext in extra {
            let ext = normalize_extension(ext);
            validate_extension(&ext)?;
            extensions.insert(ext);
        }
        Ok(extensions)
    }
}

/// Accept `md` as shorthand for `.md`.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn validate_extension(ext: &str) -> Result<()> {
    if !ext.starts_with('.') {
        anyhow::bail!("extension \"{}\" must start with '.'", ext);
    }
    if ext
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '\\')
    {
        anyhow::bail!(
            "extension \"{}\" must not contain whitespace or path separators",
            ext
        );
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    // relative paths would stop climbing at the working directory
    let mut current = std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            log::debug!("loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
