use std::io::{IsTerminal, stderr};

use anyhow::{Context, Result, anyhow};
use crossterm::style::Stylize;
use tracing::debug;

use crate::args::LinkArgs;
use crate::config::Settings;
use crate::core::lines::parse_bounds;
use crate::core::{LineRange, LinkRequest, require_repository};
use crate::git::Git;
use crate::util::clipboard::{Clipboard, Delivery};
use crate::views::{LinkView, print_json};

pub fn run(git: &Git, settings: &Settings, args: &LinkArgs, porcelain: bool) -> Result<()> {
    let range = line_range(&args.lines, args.zero_based)?;
    let relative_path = git.relative_path(&args.path)?;

    let remote_url = git.remote_url(&settings.remote)?.ok_or_else(|| {
        anyhow!(
            "no '{}' remote configured; add one or pass --remote",
            settings.remote
        )
    })?;
    let repo = require_repository(&remote_url, &settings.host)?;
    let branch = resolve_branch(git, settings, args)?;

    let url = LinkRequest {
        host: &settings.host,
        repo: &repo,
        branch: &branch,
        relative_path: &relative_path,
        range,
        encode_branch: settings.encode_branch,
    }
    .compose();
    debug!(%url, "composed link");

    let copied = !args.no_copy && copy_to_clipboard(&url);

    if porcelain {
        return print_json(&LinkView {
            url,
            host: settings.host.clone(),
            owner: repo.owner,
            repo: repo.repo,
            branch,
            path: relative_path,
            start: range.start(),
            end: range.end(),
            fragment: range.fragment(),
            copied,
        });
    }

    println!("{url}");
    if copied {
        let is_tty = stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        let message = "link copied to clipboard";
        if is_tty {
            eprintln!("{} {}", "✓".green().bold(), message.green());
        } else {
            eprintln!("{message}");
        }
    }
    Ok(())
}

fn line_range(text: &str, zero_based: bool) -> Result<LineRange> {
    let range = if zero_based {
        let (start, end) = parse_bounds(text)?;
        LineRange::from_zero_based(start, end)?
    } else {
        text.parse::<LineRange>()?
    };
    Ok(range)
}

/// Explicit branch, then the default branch when requested, then the checked-out branch,
/// falling back to the default branch when HEAD is detached or git cannot tell.
fn resolve_branch(git: &Git, settings: &Settings, args: &LinkArgs) -> Result<String> {
    if let Some(branch) = args.branch.as_deref().map(str::trim)
        && !branch.is_empty()
    {
        return Ok(branch.to_string());
    }
    if args.main_branch {
        return Ok(settings.default_branch.clone());
    }
    let current = git
        .current_branch()
        .context("failed to determine the current branch")?;
    Ok(current.unwrap_or_else(|| {
        debug!(
            default = %settings.default_branch,
            "no current branch detected; using default branch"
        );
        settings.default_branch.clone()
    }))
}

fn copy_to_clipboard(url: &str) -> bool {
    match Clipboard::default().copy(url) {
        Ok(Delivery::Persistent) => true,
        Ok(Delivery::UntilExit) => {
            eprintln!(
                "warning: no clipboard helper (wl-copy, xclip) accepted the link; the clipboard \
                 keeps it only if a clipboard manager claims it before share-link exits"
            );
            false
        }
        Err(err) => {
            eprintln!("warning: could not copy link to clipboard: {err:#}");
            false
        }
    }
}
