pub mod lines;
pub mod link;
pub mod remote;

use thiserror::Error;

pub use lines::LineRange;
pub use link::LinkRequest;
pub use remote::{RepositoryInfo, parse_remote_url};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a {host} repository")]
pub struct NotForgeRepository {
    pub host: String,
}

/// Like [`parse_remote_url`], but reports a non-matching remote as an error.
pub fn require_repository(
    remote_url: &str,
    host: &str,
) -> Result<RepositoryInfo, NotForgeRepository> {
    parse_remote_url(remote_url, host).ok_or_else(|| NotForgeRepository {
        host: host.to_string(),
    })
}
