//! Source repository link and label.

use std::sync::LazyLock;

use regex::Regex;

/// Label used when the repository host is not a known platform.
pub const FALLBACK_REPO_LABEL: &str = "Source";

/// Host for short `owner/repo` references.
const DEFAULT_REPO_HOST: &str = "https://github.com";

static ABSOLUTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?:").expect("invalid absolute url regex"));

/// Scheme and host of an absolute URL.
static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+").expect("invalid origin regex"));

/// Known hosting platforms, matched against the origin in order.
static PLATFORMS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ["GitHub", "GitLab", "Bitbucket"]
        .into_iter()
        .map(|name| {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(name)))
                .expect("invalid platform regex");
            (pattern, name)
        })
        .collect()
});

/// Derive the repository link from a repository reference.
///
/// Absolute `http:`/`https:` URLs are returned unchanged, anything else is
/// treated as a GitHub `owner/repo` reference. Returns `None` for a missing or
/// empty reference.
#[must_use]
pub fn derive_repo_link(repo: Option<&str>) -> Option<String> {
    let repo = repo.filter(|repo| !repo.is_empty())?;
    if ABSOLUTE_URL_RE.is_match(repo) {
        Some(repo.to_owned())
    } else {
        Some(format!("{DEFAULT_REPO_HOST}/{repo}"))
    }
}

/// Derive the display label for a repository link.
///
/// An explicit label always wins. Otherwise the link's origin is matched
/// case-insensitively against GitHub, GitLab and Bitbucket, falling back to
/// [`FALLBACK_REPO_LABEL`]. Returns `None` when there is no link.
#[must_use]
pub fn derive_repo_label(repo_link: Option<&str>, explicit_label: Option<&str>) -> Option<String> {
    let repo_link = repo_link?;
    if let Some(label) = explicit_label {
        return Some(label.to_owned());
    }

    let Some(origin) = ORIGIN_RE.find(repo_link) else {
        tracing::debug!(link = %repo_link, "Repository link has no origin");
        return Some(FALLBACK_REPO_LABEL.to_owned());
    };

    let label = PLATFORMS
        .iter()
        .find(|(pattern, _)| pattern.is_match(origin.as_str()))
        .map_or(FALLBACK_REPO_LABEL, |&(_, name)| name);
    Some(label.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_link_absent() {
        assert_eq!(derive_repo_link(None), None);
        assert_eq!(derive_repo_link(Some("")), None);
    }

    #[test]
    fn test_repo_link_absolute_url_unchanged() {
        assert_eq!(
            derive_repo_link(Some("https://gitlab.com/x/y")),
            Some("https://gitlab.com/x/y".to_owned())
        );
        assert_eq!(
            derive_repo_link(Some("http://git.example.com/x")),
            Some("http://git.example.com/x".to_owned())
        );
    }

    #[test]
    fn test_repo_link_short_reference_uses_github() {
        assert_eq!(
            derive_repo_link(Some("acme/widget")),
            Some("https://github.com/acme/widget".to_owned())
        );
    }

    #[test]
    fn test_repo_link_other_schemes_are_not_urls() {
        // Only http and https count as absolute
        assert_eq!(
            derive_repo_link(Some("git@github.com:acme/widget.git")),
            Some("https://github.com/git@github.com:acme/widget.git".to_owned())
        );
        assert_eq!(
            derive_repo_link(Some("HTTPS://example.com")),
            Some("https://github.com/HTTPS://example.com".to_owned())
        );
    }

    #[test]
    fn test_repo_label_absent_without_link() {
        assert_eq!(derive_repo_label(None, None), None);
        assert_eq!(derive_repo_label(None, Some("MyRepo")), None);
    }

    #[test]
    fn test_repo_label_explicit_wins() {
        assert_eq!(
            derive_repo_label(Some("https://gitlab.com/x/y"), Some("MyRepo")),
            Some("MyRepo".to_owned())
        );
        assert_eq!(
            derive_repo_label(Some("https://example.com/x"), Some("MyRepo")),
            Some("MyRepo".to_owned())
        );
    }

    #[test]
    fn test_repo_label_known_platforms() {
        assert_eq!(
            derive_repo_label(Some("https://github.com/acme/widget"), None),
            Some("GitHub".to_owned())
        );
        assert_eq!(
            derive_repo_label(Some("https://gitlab.com/x/y"), None),
            Some("GitLab".to_owned())
        );
        assert_eq!(
            derive_repo_label(Some("https://bitbucket.org/x/y"), None),
            Some("Bitbucket".to_owned())
        );
    }

    #[test]
    fn test_repo_label_is_case_insensitive() {
        assert_eq!(
            derive_repo_label(Some("https://GITLAB.example.com/x"), None),
            Some("GitLab".to_owned())
        );
    }

    #[test]
    fn test_repo_label_only_matches_host() {
        assert_eq!(
            derive_repo_label(Some("https://example.com/github/x"), None),
            Some("Source".to_owned())
        );
    }

    #[test]
    fn test_repo_label_unknown_host_falls_back() {
        assert_eq!(
            derive_repo_label(Some("https://example.com/x"), None),
            Some("Source".to_owned())
        );
    }

    #[test]
    fn test_repo_label_without_origin_falls_back() {
        assert_eq!(
            derive_repo_label(Some("http:github"), None),
            Some("Source".to_owned())
        );
    }

    #[test]
    fn test_repo_label_for_derived_short_reference() {
        let link = derive_repo_link(Some("acme/widget"));

        assert_eq!(
            derive_repo_label(link.as_deref(), None),
            Some("GitHub".to_owned())
        );
    }
}
