use std::path::{Component, Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Git {
    root: PathBuf,
}

impl Git {
    pub fn discover() -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .context("failed to run git rev-parse --show-toplevel")?;
        if !output.status.success() {
            return Err(anyhow!("not inside a git repository"));
        }
        let root = String::from_utf8(output.stdout)?.trim().to_string();
        debug!(root = %root, "discovered repository");
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        let raw = self
            .capture_optional(["remote", "get-url", remote])
            .with_context(|| format!("failed to read {remote} remote URL"))?;
        debug!(remote, url = ?raw, "read remote url");
        Ok(raw)
    }

    /// Name of the checked-out branch, or `None` on a detached HEAD.
    pub fn current_branch(&self) -> Result<Option<String>> {
        if let Some(branch) = self.capture_optional(["branch", "--show-current"])? {
            return Ok(Some(branch));
        }
        debug!("git branch --show-current gave no branch; trying symbolic-ref");
        self.capture_optional(["symbolic-ref", "--short", "HEAD"])
    }

    /// Git config as seen from this repository (local, global and system scopes).
    pub fn config(&self) -> GitConfig {
        GitConfig {
            root: Some(self.root.clone()),
        }
    }

    /// Path of `file` relative to the repository root, joined with `/`.
    pub fn relative_path(&self, file: &Path) -> Result<String> {
        let file = file
            .canonicalize()
            .with_context(|| format!("file not found: {}", file.display()))?;
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", self.root.display()))?;
        let relative = file.strip_prefix(&root).map_err(|_| {
            anyhow!(
                "{} is outside the repository at {}",
                file.display(),
                root.display()
            )
        })?;
        to_forward_slashes(relative)
    }

    /// Runs git and returns trimmed stdout, or `None` when git fails or prints nothing.
    fn capture_optional<const N: usize>(&self, args: [&str; N]) -> Result<Option<String>> {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()
            .with_context(|| format!("failed to run git {:?}", args))?;
        if !output.status.success() {
            debug!(
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }
        let value = String::from_utf8(output.stdout)?.trim().to_string();
        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(value))
    }
}

/// Reader for `git config` values, scoped to a repository or to the user outside one.
#[derive(Debug, Clone, Default)]
pub struct GitConfig {
    root: Option<PathBuf>,
}

impl GitConfig {
    /// Global and system scopes only, for commands run outside a repository.
    pub fn outside_repository() -> Self {
        Self::default()
    }

    /// Raw value of `key`; a key present without a value reads as `Some("")`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.read(&["config", "--get", key])
            .with_context(|| format!("failed to read git config {key}"))
    }

    /// Boolean value of `key`, normalized by git itself (`yes`, `on`, `1` and a bare key are
    /// all true).
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let Some(raw) = self
            .read(&["config", "--type=bool", "--get", key])
            .with_context(|| format!("failed to read git config {key}"))?
        else {
            return Ok(None);
        };
        parse_git_bool(&raw)
            .map(Some)
            .ok_or_else(|| anyhow!("invalid boolean '{raw}' for git config {key}"))
    }

    fn read(&self, args: &[&str]) -> Result<Option<String>> {
        let mut cmd = Command::new("git");
        if let Some(root) = &self.root {
            cmd.current_dir(root);
        }
        let output = cmd
            .args(args)
            .output()
            .with_context(|| format!("failed to run git {:?}", args))?;
        match output.status.code() {
            Some(0) => {
                let value = String::from_utf8(output.stdout)?;
                Ok(Some(value.trim_end_matches(['\n', '\r']).to_string()))
            }
            // `git config --get` exits with 1 when the key is unset.
            Some(1) => Ok(None),
            _ => Err(anyhow!(
                "git command failed {:?}: {}",
                args,
                String::from_utf8_lossy(&output.stderr).trim()
            )),
        }
    }
}

fn parse_git_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn to_forward_slashes(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| anyhow!("path is not valid UTF-8: {}", relative.display()))?,
            ),
            Component::CurDir => {}
            other => {
                return Err(anyhow!(
                    "unexpected path component {:?} in {}",
                    other,
                    relative.display()
                ));
            }
        }
    }
    if parts.is_empty() {
        return Err(anyhow!("expected a file inside the repository, got its root"));
    }
    Ok(parts.join("/"))
}
