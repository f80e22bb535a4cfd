//! Header navigation for a single page.

use serde::Serialize;

use crate::entry::{NavEntry, RawNavItem};
use crate::locale::{
    KnownRoutes, LocaleMap, SwitcherText, detect_locale_prefix, merge_locale_switcher_with,
};
use crate::repo::{derive_repo_label, derive_repo_link};
use crate::resolve::resolve_links;

/// Site-wide theme settings used by the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarConfig {
    /// Navigation records.
    pub nav: Vec<RawNavItem>,
    /// Repository reference (`owner/repo` or URL).
    pub repo: Option<String>,
    /// Explicit repository link label.
    pub repo_label: Option<String>,
    /// Locale switcher text.
    pub select_text: Option<String>,
    /// Locale switcher accessible label.
    pub aria_label: Option<String>,
}

/// Source repository link with its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RepoLink {
    /// Absolute repository URL.
    pub url: String,
    /// Display label (platform name or explicit label).
    pub label: String,
}

/// Resolved header navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navbar {
    /// Navigation entries in display order.
    pub links: Vec<NavEntry>,
    /// Repository link (None when no repository is configured).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoLink>,
}

impl Navbar {
    /// Build the header navigation for the page at `current_path`.
    ///
    /// The current locale is detected from `current_path`. Its `nav`, select
    /// text and aria label override the theme values when set.
    #[must_use]
    pub fn build<R: KnownRoutes + ?Sized>(
        config: &NavbarConfig,
        locales: &LocaleMap,
        current_path: &str,
        known_routes: &R,
    ) -> Self {
        let locale_prefix = detect_locale_prefix(locales, current_path);
        let locale = locale_prefix.and_then(|prefix| locales.get(prefix));

        let nav = locale
            .and_then(|locale| locale.nav.as_deref())
            .unwrap_or(config.nav.as_slice());
        let base = resolve_links(nav);

        let text = SwitcherText {
            select_text: locale
                .and_then(|locale| locale.select_text.as_deref())
                .or(config.select_text.as_deref()),
            aria_label: locale
                .and_then(|locale| locale.aria_label.as_deref())
                .or(config.aria_label.as_deref()),
        };
        let links = merge_locale_switcher_with(
            &base,
            locales,
            current_path,
            known_routes,
            locale_prefix.unwrap_or_default(),
            text,
        );

        tracing::debug!(
            path = %current_path,
            locale = ?locale_prefix,
            links = links.len(),
            "Resolved header navigation"
        );

        Self {
            links,
            repo: Self::repo_link(config),
        }
    }

    /// Derive the repository link and label from the theme settings.
    fn repo_link(config: &NavbarConfig) -> Option<RepoLink> {
        let url = derive_repo_link(config.repo.as_deref())?;
        let label = derive_repo_label(Some(&url), config.repo_label.as_deref())?;
        Some(RepoLink { url, label })
    }
}
