/// Owner and repository name extracted from a forge remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub owner: String,
    pub repo: String,
}

/// Parses `remote_url` against the forge `host`.
///
/// Recognizes, in order:
///
/// - `https://<host>/<owner>/<repo>[.git]`
/// - `git@<host>:<owner>/<repo>[.git]`
///
/// The host is compared literally. `<owner>/<repo>` must end the string and neither part
/// may contain `/`. Returns `None` when neither form matches.
pub fn parse_remote_url(remote_url: &str, host: &str) -> Option<RepositoryInfo> {
    match_after_marker(remote_url, &format!("https://{host}/"))
        .or_else(|| match_after_marker(remote_url, &format!("git@{host}:")))
}

fn match_after_marker(remote_url: &str, marker: &str) -> Option<RepositoryInfo> {
    remote_url
        .match_indices(marker)
        .find_map(|(idx, _)| split_owner_repo(&remote_url[idx + marker.len()..]))
}

fn split_owner_repo(path: &str) -> Option<RepositoryInfo> {
    let (owner, repo) = path.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    let repo = match repo.strip_suffix(".git") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => repo,
    };
    Some(RepositoryInfo {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}
