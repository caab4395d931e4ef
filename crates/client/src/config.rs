//! Client configuration via `ringkv.toml`
//!
//! The `[fetch]` table holds default fetch options applied by
//! [`FetchValue::with_defaults`](crate::FetchValue::with_defaults). Options
//! set explicitly on a command always take precedence over these.

use serde::{Deserialize, Serialize};
use std::path::Path;

use ringkv_core::Quorum;

use crate::option::{FetchOption, OptionSet};
use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "ringkv.toml";

/// Default fetch options.
///
/// Every field is optional; unset fields leave the bucket's own
/// properties in charge. Conditional fetch (`if_modified`) is per-request
/// and cannot be configured here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchDefaults {
    /// Read quorum: `"one"`, `"quorum"`, `"all"`, `"default"`, a count
    /// (`2` or `"2"`), or a wire sentinel such as `-3`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Quorum>,
    /// Primary-read quorum, same forms as `r`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<Quorum>,
    /// Replication factor override (at least 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_val: Option<u32>,
    /// Operation deadline in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u32>,
    /// Return the vector clock of tombstones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_vclock: Option<bool>,
    /// Fetch metadata only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<bool>,
    /// Reduced quorum semantics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_quorum: Option<bool>,
    /// Allow fallback nodes to satisfy quorum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sloppy_quorum: Option<bool>,
    /// Count a replica's not-found toward quorum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notfound_ok: Option<bool>,
}

impl FetchDefaults {
    /// Check values the type system cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `n_val` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.n_val == Some(0) {
            return Err(Error::Config {
                reason: "n_val must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The configured defaults as an option set
    pub fn option_set(&self) -> OptionSet {
        [
            self.r.map(FetchOption::R),
            self.pr.map(FetchOption::Pr),
            self.n_val.map(FetchOption::NVal),
            self.timeout_ms.map(FetchOption::Timeout),
            self.deleted_vclock.map(FetchOption::DeletedVClock),
            self.head.map(FetchOption::Head),
            self.basic_quorum.map(FetchOption::BasicQuorum),
            self.sloppy_quorum.map(FetchOption::SloppyQuorum),
            self.notfound_ok.map(FetchOption::NotFoundOk),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Client configuration loaded from `ringkv.toml`.
///
/// # Example
///
/// ```toml
/// [fetch]
/// r = "quorum"
/// timeout_ms = 5000
/// notfound_ok = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Default options for fetch commands
    #[serde(default)]
    pub fetch: FetchDefaults,
}

impl FetchConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ringkv client configuration
#
# Default options for fetch commands. Anything left unset falls back to
# the bucket properties on the server. Options set on a command override
# these values.
[fetch]
# Read quorum: "one", "quorum", "all", "default" or a replica count
# r = "quorum"

# Primary-read quorum, same forms as r
# pr = "default"

# Replication factor override (at least 1)
# n_val = 3

# Operation deadline in milliseconds
# timeout_ms = 5000

# deleted_vclock = false
# head = false
# basic_quorum = false
# sloppy_quorum = true
# notfound_ok = true
"#
    }

    /// Parse and validate config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text does not parse or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "config")
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::parse(&content, &format!("config file '{}'", path.display()))?;
        tracing::debug!(
            target: "ringkv::config",
            path = %path.display(),
            defaults = config.fetch.option_set().len(),
            "Loaded fetch config"
        );
        Ok(config)
    }

    fn parse(content: &str, source: &str) -> Result<Self> {
        let config: FetchConfig = toml::from_str(content).map_err(|e| Error::Config {
            reason: format!("Failed to parse {}: {}", source, e),
        })?;
        config.fetch.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Config {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
