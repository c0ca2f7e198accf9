use anyhow::{Result, anyhow};

use crate::args::RemoteArgs;
use crate::config::Settings;
use crate::core::require_repository;
use crate::git::Git;
use crate::views::{RemoteView, print_json};

pub fn run(
    git: Option<&Git>,
    settings: &Settings,
    args: &RemoteArgs,
    porcelain: bool,
) -> Result<()> {
    let url = match (args.url.as_deref(), git) {
        (Some(url), _) => url.trim().to_string(),
        (None, Some(git)) => git
            .remote_url(&settings.remote)?
            .ok_or_else(|| anyhow!("no '{}' remote configured", settings.remote))?,
        (None, None) => return Err(anyhow!("not inside a git repository")),
    };
    let repo = require_repository(&url, &settings.host)?;

    if porcelain {
        return print_json(&RemoteView {
            url,
            host: settings.host.clone(),
            owner: repo.owner,
            repo: repo.repo,
        });
    }

    println!("{}/{}", repo.owner, repo.repo);
    Ok(())
}
