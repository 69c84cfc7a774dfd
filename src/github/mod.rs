mod readme;
mod reference;

pub use readme::GithubClient;
pub use reference::{parse, GitHubReference};

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("invalid GitHub repository URL")]
    InvalidUrl,

    #[error("GitHub returned {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("readme metadata carries no download_url")]
    MissingDownloadUrl,

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
