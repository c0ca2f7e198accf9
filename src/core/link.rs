use std::borrow::Cow;

use crate::core::lines::{LineRange, format_line_fragment};
use crate::core::remote::RepositoryInfo;
use crate::util::url::encode_path_segments;

/// Everything needed to build one permalink.
#[derive(Debug, Clone)]
pub struct LinkRequest<'a> {
    pub host: &'a str,
    pub repo: &'a RepositoryInfo,
    pub branch: &'a str,
    pub relative_path: &'a str,
    pub range: LineRange,
    pub encode_branch: bool,
}

impl LinkRequest<'_> {
    pub fn compose(&self) -> String {
        let branch = if self.encode_branch {
            Cow::Owned(encode_path_segments(self.branch))
        } else {
            Cow::Borrowed(self.branch)
        };
        compose_link(
            self.host,
            self.repo,
            &branch,
            self.relative_path,
            self.range.start(),
            self.range.end(),
        )
    }
}

/// Builds `https://{host}/{owner}/{repo}/blob/{branch}/{path}{fragment}`.
///
/// Every value is inserted as given. `relative_path` must already use `/` separators.
pub fn compose_link(
    host: &str,
    repo: &RepositoryInfo,
    branch: &str,
    relative_path: &str,
    start: u32,
    end: u32,
) -> String {
    format!(
        "https://{host}/{}/{}/blob/{branch}/{relative_path}{}",
        repo.owner,
        repo.repo,
        format_line_fragment(start, end)
    )
}
