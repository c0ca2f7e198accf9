use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// How long a successful copy lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The clipboard keeps the text after this process exits.
    Persistent,
    /// This process owns the selection; it is gone on exit unless a clipboard manager
    /// claims it first.
    UntilExit,
}

/// System clipboard with command-line fallbacks for headless sessions.
#[derive(Default)]
pub struct Clipboard {
    primary: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn copy(&mut self, text: &str) -> Result<Delivery> {
        copy_in_order(
            owner_must_outlive_selection(),
            || fallback_copy(text),
            || self.copy_primary(text),
        )
    }

    fn copy_primary(&mut self, text: &str) -> Result<()> {
        if self.primary.is_none() {
            let clipboard = arboard::Clipboard::new().context("system clipboard unavailable")?;
            self.primary = Some(clipboard);
        }
        let Some(primary) = self.primary.as_mut() else {
            return Err(anyhow!("system clipboard unavailable"));
        };
        if let Err(err) = primary.set_text(text.to_owned()) {
            debug!("system clipboard rejected text: {err}");
            self.primary = None;
            return Err(anyhow!("system clipboard rejected the link"));
        }
        Ok(())
    }
}

fn owner_must_outlive_selection() -> bool {
    cfg!(all(unix, not(target_os = "macos")))
}

/// X11 and Wayland drop a selection when its owner exits, so there the text goes to a helper
/// process first and the in-process clipboard only lasts until exit.
fn copy_in_order(
    owner_must_outlive: bool,
    helper: impl FnOnce() -> Result<()>,
    primary: impl FnOnce() -> Result<()>,
) -> Result<Delivery> {
    if owner_must_outlive {
        return match helper() {
            Ok(()) => Ok(Delivery::Persistent),
            Err(err) => primary().map(|()| Delivery::UntilExit).map_err(|_| err),
        };
    }
    primary().or_else(|_| helper()).map(|()| Delivery::Persistent)
}

fn fallback_copy(text: &str) -> Result<()> {
    for command in fallback_commands() {
        match try_command_copy(command, text) {
            Ok(()) => return Ok(()),
            Err(err) => debug!("clipboard fallback {:?} failed: {err:#}", command),
        }
    }

    Err(anyhow!("no clipboard backend accepted the link"))
}

fn try_command_copy(command: &[&str], text: &str) -> Result<()> {
    let (program, args) = command
        .split_first()
        .context("clipboard command missing program")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write link to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("{program} did not exit cleanly"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{program} exited with status {status}"))
    }
}

#[cfg(target_os = "macos")]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    vec![&["pbcopy"]]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    vec![&["wl-copy"], &["xclip", "-selection", "clipboard"]]
}

#[cfg(target_os = "windows")]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    vec![&["powershell.exe", "-NoProfile", "-Command", "Set-Clipboard"]]
}

#[cfg(not(any(unix, target_os = "windows")))]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    Vec::new()
}
