use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;
use url::Url;

/// Identifies a repository on the hosting service.
///
/// Accepts either `owner/repo` shorthand or a full URL (an optional `.git`
/// suffix and any extra path segments are stripped). Parsing happens before
/// any network I/O, so malformed input fails fast.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: String,
    repo: String,
}

impl RepoSpec {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            bail!("empty repository identifier");
        }

        if input.contains("://") {
            let url = Url::parse(input)?;
            return Self::from_url(&url);
        }

        let mut segments = input.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                owner: owner.to_owned(),
                repo: repo.trim_end_matches(".git").to_owned(),
            }),
            _ => bail!("invalid repository identifier '{input}': expected 'owner/repo' or a full URL"),
        }
    }

    fn from_url(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 || path_segments[0].is_empty() || path_segments[1].is_empty() {
            bail!("invalid repository URL: missing owner or repo name: {url}");
        }

        Ok(Self {
            owner: path_segments[0].to_owned(),
            repo: path_segments[1].trim_end_matches(".git").to_owned(),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let spec = RepoSpec::parse("tokio-rs/tokio").unwrap();
        assert_eq!(spec.owner(), "tokio-rs");
        assert_eq!(spec.repo(), "tokio");
        assert_eq!(spec.to_string(), "tokio-rs/tokio");
    }

    #[test]
    fn test_parse_shorthand_with_git_extension() {
        let spec = RepoSpec::parse("owner/repo.git").unwrap();
        assert_eq!(spec.repo(), "repo");
    }

    #[test]
    fn test_parse_full_url() {
        let spec = RepoSpec::parse("https://github.com/serde-rs/serde").unwrap();
        assert_eq!(spec.owner(), "serde-rs");
        assert_eq!(spec.repo(), "serde");
    }

    #[test]
    fn test_parse_full_url_with_git_extension() {
        let spec = RepoSpec::parse("https://github.com/owner/repo.git").unwrap();
        assert_eq!(spec.to_string(), "owner/repo");
    }

    #[test]
    fn test_parse_url_with_additional_path_segments() {
        let spec = RepoSpec::parse("https://github.com/tokio-rs/tokio/tree/master/tokio-util").unwrap();
        assert_eq!(spec.owner(), "tokio-rs");
        assert_eq!(spec.repo(), "tokio");
    }

    #[test]
    fn test_parse_invalid_single_word() {
        let _ = RepoSpec::parse("invalid").unwrap_err();
    }

    #[test]
    fn test_parse_invalid_empty() {
        let _ = RepoSpec::parse("").unwrap_err();
    }

    #[test]
    fn test_parse_invalid_too_many_segments() {
        let _ = RepoSpec::parse("a/b/c").unwrap_err();
    }

    #[test]
    fn test_parse_invalid_empty_owner() {
        let _ = RepoSpec::parse("/repo").unwrap_err();
    }

    #[test]
    fn test_parse_invalid_url_only_owner() {
        let _ = RepoSpec::parse("https://github.com/tokio-rs").unwrap_err();
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let spec = RepoSpec::parse("  owner/repo  ").unwrap();
        assert_eq!(spec.to_string(), "owner/repo");
    }
}
