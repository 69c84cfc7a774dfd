use serde::Deserialize;
use tracing::debug;

use super::reference::{parse, GitHubReference};
use super::GithubError;

/// Sent on every outbound call; GitHub rejects anonymous clients.
const USER_AGENT: &str = "projhub/0.1.0";

/// Readme metadata returned by `GET /repos/{owner}/{repo}/readme`.
#[derive(Debug, Deserialize)]
struct ReadmeMetadata {
    download_url: Option<String>,
}

/// Shared GitHub API client; cheap to clone, reqwest pools connections
/// internally.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
}

impl GithubClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// Fetch the raw README text for a repository URL.
    ///
    /// Two sequential hops: readme metadata first, then the raw content at
    /// its `download_url`. No caching and no retries; a failing hop surfaces
    /// as [`GithubError`].
    pub async fn fetch_readme(&self, url: &str) -> Result<String, GithubError> {
        let reference = parse(url)?;

        let metadata_url = readme_endpoint(&reference);
        debug!(owner = %reference.owner, repo = %reference.repo, "fetching readme metadata");
        let response = self.http.get(&metadata_url).send().await?;
        if !response.status().is_success() {
            return Err(GithubError::UpstreamStatus {
                status: response.status(),
                url: metadata_url,
            });
        }

        let metadata: ReadmeMetadata = response.json().await?;
        let download_url = metadata
            .download_url
            .ok_or(GithubError::MissingDownloadUrl)?;

        let content = self.http.get(&download_url).send().await?;
        if !content.status().is_success() {
            return Err(GithubError::UpstreamStatus {
                status: content.status(),
                url: download_url,
            });
        }
        Ok(content.text().await?)
    }
}

fn readme_endpoint(reference: &GitHubReference) -> String {
    format!(
        "https://api.github.com/repos/{}/{}/readme",
        reference.owner, reference.repo
    )
}
