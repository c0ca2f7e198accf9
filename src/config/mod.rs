//! Settings layered from command-line flags, git config and built-in defaults.
//!
//! Git config keys live under the `share-link` section, so they can be set per repository
//! or globally:
//!
//! ```text
//! git config share-link.baseUrl github.company.com
//! git config --global share-link.defaultBranch trunk
//! ```

use anyhow::Result;
use tracing::debug;

use crate::git::GitConfig;
use crate::util::url::bare_host;

pub const DEFAULT_HOST: &str = "github.com";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_REMOTE: &str = "origin";

const KEY_BASE_URL: &str = "share-link.baseUrl";
const KEY_DEFAULT_BRANCH: &str = "share-link.defaultBranch";
const KEY_REMOTE: &str = "share-link.remote";
const KEY_ENCODE_BRANCH: &str = "share-link.encodeBranch";

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub default_branch: Option<String>,
    pub remote: Option<String>,
    pub encode_branch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub default_branch: String,
    pub remote: String,
    pub encode_branch: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            encode_branch: false,
        }
    }
}

/// Where configured values come from; git config in practice.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn get_bool(&self, key: &str) -> Result<Option<bool>>;
}

impl ConfigSource for GitConfig {
    fn get(&self, key: &str) -> Result<Option<String>> {
        GitConfig::get(self, key)
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        GitConfig::get_bool(self, key)
    }
}

impl Settings {
    /// Resolves each setting from `overrides`, then `source`, then the defaults.
    pub fn resolve(overrides: &Overrides, source: &impl ConfigSource) -> Result<Self> {
        let defaults = Self::default();

        let host = pick(overrides.host.clone(), KEY_BASE_URL, source)?
            .map(|value| bare_host(&value))
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.host);
        let default_branch = pick(overrides.default_branch.clone(), KEY_DEFAULT_BRANCH, source)?
            .unwrap_or(defaults.default_branch);
        let remote =
            pick(overrides.remote.clone(), KEY_REMOTE, source)?.unwrap_or(defaults.remote);
        let encode_branch = overrides.encode_branch
            || source
                .get_bool(KEY_ENCODE_BRANCH)?
                .unwrap_or(defaults.encode_branch);

        let settings = Self {
            host,
            default_branch,
            remote,
            encode_branch,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn pick(
    explicit: Option<String>,
    key: &str,
    source: &impl ConfigSource,
) -> Result<Option<String>> {
    let explicit = explicit
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    if explicit.is_some() {
        debug!(key, "using command-line value");
        return Ok(explicit);
    }
    let configured = source
        .get(key)?
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    if configured.is_some() {
        debug!(key, "using git config value");
    }
    Ok(configured)
}
