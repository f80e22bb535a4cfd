//! Locale switcher.
//!
//! On sites with more than one locale the header gets an extra dropdown that
//! links every locale. For each locale the switcher tries to stay on the
//! same page, falling back to the locale's homepage when the translated page
//! is not a known route.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::entry::{NavEntry, RawNavItem};

/// Dropdown text used when no select text is configured.
pub const DEFAULT_SELECT_TEXT: &str = "Languages";

/// Accessible dropdown label used when none is configured.
pub const DEFAULT_ARIA_LABEL: &str = "Select language";

/// Root locale prefix.
const ROOT_PREFIX: &str = "/";

/// Configured locales keyed by path prefix, in configuration order.
pub type LocaleMap = IndexMap<String, LocaleDescriptor>;

/// One configured site locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleDescriptor {
    /// Path prefix (e.g. `/`, `/fr/`). Same as the key in [`LocaleMap`].
    pub path_prefix: String,
    /// Language tag (e.g. `en-US`).
    pub language_tag: String,
    /// Text shown in the switcher instead of the language tag.
    pub display_label: Option<String>,
    /// Switcher text for pages in this locale.
    pub select_text: Option<String>,
    /// Switcher accessible label for pages in this locale.
    pub aria_label: Option<String>,
    /// Navigation for pages in this locale, replacing the theme navigation.
    pub nav: Option<Vec<RawNavItem>>,
}

impl LocaleDescriptor {
    /// Create a locale without overrides.
    #[must_use]
    pub fn new(path_prefix: impl Into<String>, language_tag: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            language_tag: language_tag.into(),
            ..Self::default()
        }
    }

    /// Set the switcher display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.display_label = Some(label.into());
        self
    }

    /// Text shown for this locale in the switcher.
    #[must_use]
    pub fn switcher_text(&self) -> &str {
        self.display_label.as_deref().unwrap_or(&self.language_tag)
    }
}

/// Set of paths the router can resolve.
pub trait KnownRoutes {
    /// Check whether `path` is a known route.
    fn contains_route(&self, path: &str) -> bool;
}

impl<S: BuildHasher> KnownRoutes for HashSet<String, S> {
    fn contains_route(&self, path: &str) -> bool {
        self.contains(path)
    }
}

impl KnownRoutes for BTreeSet<String> {
    fn contains_route(&self, path: &str) -> bool {
        self.contains(path)
    }
}

impl KnownRoutes for [String] {
    fn contains_route(&self, path: &str) -> bool {
        self.iter().any(|route| route == path)
    }
}

impl KnownRoutes for Vec<String> {
    fn contains_route(&self, path: &str) -> bool {
        self.as_slice().contains_route(path)
    }
}

/// Texts for the locale switcher dropdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwitcherText<'a> {
    /// Dropdown text (default: [`DEFAULT_SELECT_TEXT`]).
    pub select_text: Option<&'a str>,
    /// Accessible label (default: [`DEFAULT_ARIA_LABEL`]).
    pub aria_label: Option<&'a str>,
}

/// Find the locale prefix of the page at `current_path`.
///
/// A non-root prefix that `current_path` starts with wins (the last one in
/// configuration order if several match). Otherwise the root prefix is used
/// when configured.
#[must_use]
pub fn detect_locale_prefix<'a>(locales: &'a LocaleMap, current_path: &str) -> Option<&'a str> {
    let mut root = None;
    let mut matched = None;
    for prefix in locales.keys() {
        if prefix == ROOT_PREFIX {
            root = Some(prefix.as_str());
        } else if current_path.starts_with(prefix.as_str()) {
            matched = Some(prefix.as_str());
        }
    }
    matched.or(root)
}

/// Append the locale switcher to `base` when more than one locale exists.
///
/// Returns `base` unchanged for zero or one locales. Otherwise returns `base`
/// followed by a dropdown titled `select_text` (default `"Languages"`).
#[must_use]
pub fn merge_locale_switcher<R: KnownRoutes + ?Sized>(
    base: &[NavEntry],
    locales: &LocaleMap,
    current_path: &str,
    known_routes: &R,
    current_locale_prefix: &str,
    select_text: Option<&str>,
) -> Vec<NavEntry> {
    merge_locale_switcher_with(
        base,
        locales,
        current_path,
        known_routes,
        current_locale_prefix,
        SwitcherText {
            select_text,
            aria_label: None,
        },
    )
}

/// Like [`merge_locale_switcher`], with both switcher texts configurable.
#[must_use]
pub fn merge_locale_switcher_with<R: KnownRoutes + ?Sized>(
    base: &[NavEntry],
    locales: &LocaleMap,
    current_path: &str,
    known_routes: &R,
    current_locale_prefix: &str,
    text: SwitcherText<'_>,
) -> Vec<NavEntry> {
    if locales.len() <= 1 {
        return base.to_vec();
    }

    let active_tag = locales
        .get(current_locale_prefix)
        .map(|locale| locale.language_tag.as_str());

    let items = locales
        .iter()
        .map(|(prefix, locale)| {
            let link = if active_tag == Some(locale.language_tag.as_str()) {
                current_path.to_owned()
            } else {
                same_page_link(current_path, current_locale_prefix, prefix, known_routes)
            };
            NavEntry::plain(locale.switcher_text(), link)
        })
        .collect();

    let mut switcher = NavEntry::dropdown(
        text.select_text.unwrap_or(DEFAULT_SELECT_TEXT),
        items,
    );
    switcher.aria_label = Some(text.aria_label.unwrap_or(DEFAULT_ARIA_LABEL).to_owned());

    let mut links = Vec::with_capacity(base.len() + 1);
    links.extend_from_slice(base);
    links.push(switcher);
    links
}

/// Link to the current page in another locale, or that locale's homepage.
fn same_page_link<R: KnownRoutes + ?Sized>(
    current_path: &str,
    current_prefix: &str,
    target_prefix: &str,
    known_routes: &R,
) -> String {
    let candidate = current_path.replacen(current_prefix, target_prefix, 1);
    if known_routes.contains_route(&candidate) {
        candidate
    } else {
        tracing::debug!(
            path = %candidate,
            locale = %target_prefix,
            "Translated page not found, linking locale homepage"
        );
        target_prefix.to_owned()
    }
}
