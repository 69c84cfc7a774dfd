use lazy_static::lazy_static;
use regex::Regex;

use super::GithubError;

/// Validated (owner, repo) pair extracted from a GitHub repository URL.
///
/// Only constructible through [`parse`]; anything not matching the accepted
/// grammar is not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubReference {
    pub owner: String,
    pub repo: String,
}

/// Parse an `https://github.com/<owner>/<repo>` or
/// `git@github.com:<owner>/<repo>` URL.
///
/// A trailing `.git` suffix is stripped and trailing path segments
/// (`/tree/main`, ...) are ignored.
pub fn parse(url: &str) -> Result<GitHubReference, GithubError> {
    lazy_static! {
        static ref GITHUB_RE: Regex = Regex::new(
            r"^(?:https?://github\.com/|git@github\.com[:/])(?P<owner>[A-Za-z0-9_-]+)/(?P<repo>[A-Za-z0-9_.-]+?)(?:\.git)?(?:/.*)?$"
        )
        .unwrap();
    }

    let caps = GITHUB_RE.captures(url).ok_or(GithubError::InvalidUrl)?;
    Ok(GitHubReference {
        owner: caps["owner"].to_string(),
        repo: caps["repo"].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_url_and_strips_git_suffix() {
        let reference = parse("https://github.com/octocat/Hello-World.git").unwrap();
        assert_eq!(reference.owner, "octocat");
        assert_eq!(reference.repo, "Hello-World");
    }

    #[test]
    fn parses_plain_https_url() {
        let reference = parse("https://github.com/torvalds/linux").unwrap();
        assert_eq!(reference.owner, "torvalds");
        assert_eq!(reference.repo, "linux");
    }

    #[test]
    fn parses_ssh_style_url() {
        let reference = parse("git@github.com:foo/bar").unwrap();
        assert_eq!(reference.owner, "foo");
        assert_eq!(reference.repo, "bar");
    }

    #[test]
    fn ignores_trailing_path_segments() {
        let reference = parse("https://github.com/rust-lang/rust/tree/master/src").unwrap();
        assert_eq!(reference.owner, "rust-lang");
        assert_eq!(reference.repo, "rust");
    }

    #[test]
    fn accepts_dots_in_repo_names() {
        let reference = parse("https://github.com/tokio-rs/tokio.rs").unwrap();
        assert_eq!(reference.repo, "tokio.rs");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse("not a url"), Err(GithubError::InvalidUrl)));
        assert!(matches!(parse(""), Err(GithubError::InvalidUrl)));
    }

    #[test]
    fn rejects_missing_repo_segment() {
        assert!(matches!(
            parse("https://github.com/onlyowner"),
            Err(GithubError::InvalidUrl)
        ));
    }

    #[test]
    fn rejects_other_hosts() {
        assert!(matches!(
            parse("https://gitlab.com/foo/bar"),
            Err(GithubError::InvalidUrl)
        ));
    }

    #[test]
    fn rejects_leading_junk() {
        assert!(matches!(
            parse("see https://github.com/foo/bar"),
            Err(GithubError::InvalidUrl)
        ));
    }
}
