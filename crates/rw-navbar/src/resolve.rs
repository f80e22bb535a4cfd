//! Link resolver.
//!
//! Normalizes raw navigation records into [`NavEntry`] values. Resolution is
//! total: records with missing fields become entries with empty defaults.

use crate::entry::{NavEntry, NavKind, RawNavItem};

/// Resolve raw navigation records into navigation entries.
///
/// Produces exactly one entry per record, in the same order.
#[must_use]
pub fn resolve_links(raw: &[RawNavItem]) -> Vec<NavEntry> {
    raw.iter().map(resolve_item).collect()
}

/// Resolve a single raw navigation record.
///
/// A record with non-empty `items` becomes a [`NavKind::Dropdown`] whose
/// children are all plain links; deeper nesting is dropped. Any other record
/// becomes a [`NavKind::PlainLink`], with an empty link if none was set.
#[must_use]
pub fn resolve_item(raw: &RawNavItem) -> NavEntry {
    let children = raw.items.as_deref().unwrap_or_default();
    if children.is_empty() {
        return resolve_plain(raw);
    }

    NavEntry {
        text: raw.text.clone().unwrap_or_default(),
        link: raw.link.clone(),
        aria_label: raw.aria_label.clone(),
        target: raw.target.clone(),
        rel: raw.rel.clone(),
        items: children.iter().map(resolve_plain).collect(),
        kind: NavKind::Dropdown,
    }
}

/// Resolve a record as a plain link, ignoring any items.
fn resolve_plain(raw: &RawNavItem) -> NavEntry {
    let text = raw.text.clone().unwrap_or_default();

    if raw.items.as_ref().is_some_and(|items| !items.is_empty()) {
        tracing::debug!(text = %text, "Dropping nested navigation items");
    }
    if raw.link.is_none() {
        tracing::debug!(text = %text, "Navigation entry has no link");
    }

    NavEntry {
        text,
        link: Some(raw.link.clone().unwrap_or_default()),
        aria_label: raw.aria_label.clone(),
        target: raw.target.clone(),
        rel: raw.rel.clone(),
        items: Vec::new(),
        kind: NavKind::PlainLink,
    }
}
