//! Inventory configuration via `stockroom.toml`
//!
//! The file is optional and read from the working directory. When it is
//! absent the defaults below apply and nothing is written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stockroom_core::{Error, Result};

use crate::store::LoadPolicy;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "stockroom.toml";

/// Default product file
pub const DEFAULT_DATA_FILE: &str = "products.txt";

/// Shell presentation settings, the `[shell]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    /// Output format: `"human"` or `"json"`.
    #[serde(default = "default_output")]
    pub output: String,
    /// Maximum tracing level written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            log_level: default_log_level(),
        }
    }
}

impl ShellConfig {
    /// Parse `log_level` into a tracing level.
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.log_level.parse().map_err(|_| {
            Error::Config(format!(
                "invalid log_level '{}'. Expected one of error, warn, info, debug, trace.",
                self.log_level
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        match self.output.as_str() {
            "human" | "json" => {}
            other => {
                return Err(Error::Config(format!(
                    "invalid output '{}'. Expected \"human\" or \"json\".",
                    other
                )))
            }
        }
        self.log_level()?;
        Ok(())
    }
}

/// Inventory configuration loaded from `stockroom.toml`.
///
/// # Example
///
/// ```toml
/// data_file = "products.txt"
/// load_policy = "skip"
/// price_tolerance = 0.0
///
/// [shell]
/// output = "human"
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockroomConfig {
    /// Product file loaded at startup and saved at exit.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Malformed-line policy: `"skip"` or `"abort"`.
    #[serde(default = "default_load_policy")]
    pub load_policy: String,
    /// Absolute tolerance for exact-price filtering.
    #[serde(default)]
    pub price_tolerance: f64,
    /// Shell settings.
    #[serde(default)]
    pub shell: ShellConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_load_policy() -> String {
    "skip".to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            load_policy: default_load_policy(),
            price_tolerance: 0.0,
            shell: ShellConfig::default(),
        }
    }
}

impl StockroomConfig {
    /// Parse the load policy string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"skip"` or `"abort"`.
    pub fn load_policy(&self) -> Result<LoadPolicy> {
        self.load_policy.parse()
    }

    /// Check every field eagerly.
    pub fn validate(&self) -> Result<()> {
        self.load_policy()?;
        if !self.price_tolerance.is_finite() || self.price_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "price_tolerance must be a finite number >= 0, got {}",
                self.price_tolerance
            )));
        }
        self.shell.validate()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Stockroom configuration
#
# Product file, loaded at startup and rewritten at exit
data_file = "products.txt"

# What to do with a line that does not decode: "skip" (default) or "abort"
#   "skip"  = report the line number and keep loading
#   "abort" = load nothing and report the first bad line
# Either way, a file that did not load cleanly is renamed to
# "<data_file>.bak" at exit before the new file is written.
load_policy = "skip"

# Tolerance for "filter by exact price" (default 0.0 = exact match)
price_tolerance = 0.0

[shell]
# "human" (default) or "json"
output = "human"
# error | warn (default) | info | debug | trace
log_level = "warn"
"#
    }

    /// Parse config from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: StockroomConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Load `stockroom.toml` from `dir`, or the defaults if it is absent.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Product file path, resolved against `dir` when relative.
    pub fn data_path(&self, dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            dir.join(&self.data_file)
        }
    }
}
