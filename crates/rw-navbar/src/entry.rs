//! Navigation entry types.
//!
//! [`RawNavItem`] is the loosely shaped record read from configuration, where
//! every field may be missing. [`NavEntry`] is the normalized form handed to
//! the view layer.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Links that start with a URL scheme leave the site.
static EXTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+:").expect("invalid external link regex"));

/// Target assigned to external links without an explicit one.
const BLANK_TARGET: &str = "_blank";

/// Rel assigned to links opened in a new tab without an explicit one.
const BLANK_TARGET_REL: &str = "noopener noreferrer";

/// Navigation record as written in the theme configuration.
///
/// Either a plain link (`text` + `link`) or a group (`text` + `items`).
/// All fields are optional; the resolver substitutes empty defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    /// Display text.
    pub text: Option<String>,
    /// Target path or URL.
    pub link: Option<String>,
    /// Child records of a group.
    pub items: Option<Vec<RawNavItem>>,
    /// Accessible label.
    #[serde(alias = "ariaLabel")]
    pub aria_label: Option<String>,
    /// Link target (e.g. `_self`).
    pub target: Option<String>,
    /// Link rel attribute.
    pub rel: Option<String>,
}

impl RawNavItem {
    /// Create a plain link record.
    #[must_use]
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Create a group record.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<RawNavItem>) -> Self {
        Self {
            text: Some(text.into()),
            items: Some(items),
            ..Self::default()
        }
    }
}

/// Kind of a resolved navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavKind {
    /// Single link.
    PlainLink,
    /// Group of links shown as a dropdown.
    Dropdown,
}

/// Normalized navigation entry.
///
/// A [`NavKind::Dropdown`] entry always has at least one item. A
/// [`NavKind::PlainLink`] entry has no items and a link, which is empty when
/// the source record carried none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Target path or URL. `None` only for dropdowns without a header link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Accessible label.
    #[serde(rename = "ariaLabel", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Explicit link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Explicit link rel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Dropdown items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavEntry>,
    /// Entry kind.
    pub kind: NavKind,
}

impl NavEntry {
    /// Create a plain link entry.
    #[must_use]
    pub fn plain(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            aria_label: None,
            target: None,
            rel: None,
            items: Vec::new(),
            kind: NavKind::PlainLink,
        }
    }

    /// Create a dropdown entry.
    ///
    /// Callers must pass at least one item.
    #[must_use]
    pub fn dropdown(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        debug_assert!(!items.is_empty(), "dropdown without items");
        Self {
            text: text.into(),
            link: None,
            aria_label: None,
            target: None,
            rel: None,
            items,
            kind: NavKind::Dropdown,
        }
    }

    /// Check whether this entry is a dropdown.
    #[must_use]
    pub fn is_dropdown(&self) -> bool {
        self.kind == NavKind::Dropdown
    }

    /// Link target, or an empty string when there is none.
    #[must_use]
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    /// Check whether the link points outside the site (has a URL scheme).
    #[must_use]
    pub fn is_external(&self) -> bool {
        EXTERNAL_LINK_RE.is_match(self.href())
    }

    /// Check whether the link is a `mailto:` or `tel:` URI.
    fn is_non_http_uri(&self) -> bool {
        let href = self.href();
        href.starts_with("mailto:") || href.starts_with("tel:")
    }

    /// Target attribute to render.
    ///
    /// `mailto:` and `tel:` links never get one. An explicit target wins,
    /// otherwise external links open in a new tab.
    #[must_use]
    pub fn effective_target(&self) -> Option<&str> {
        if self.is_non_http_uri() {
            return None;
        }
        if let Some(target) = self.target.as_deref() {
            return Some(target);
        }
        self.is_external().then_some(BLANK_TARGET)
    }

    /// Rel attribute to render.
    ///
    /// `mailto:` and `tel:` links never get one. An explicit rel wins,
    /// otherwise links opened in a new tab get `noopener noreferrer`.
    #[must_use]
    pub fn effective_rel(&self) -> Option<&str> {
        if self.is_non_http_uri() {
            return None;
        }
        if let Some(rel) = self.rel.as_deref() {
            return Some(rel);
        }
        (self.effective_target() == Some(BLANK_TARGET)).then_some(BLANK_TARGET_REL)
    }
}
