//! Header navigation resolution for RW.
//!
//! Turns the theme navigation configuration into the list of entries shown in
//! the documentation site header:
//!
//! - [`resolve_links`] normalizes raw config records into [`NavEntry`] values
//! - [`merge_locale_switcher`] appends a language dropdown on multi-locale sites
//! - [`derive_repo_link`] and [`derive_repo_label`] produce the source repository link
//!
//! [`Navbar::build`] runs all of them for a single page.
//!
//! Every function here is pure: configuration comes in as arguments and
//! fresh values come out. Nothing reads global state or mutates its input.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use rw_navbar::{LocaleDescriptor, LocaleMap, NavbarConfig, Navbar, RawNavItem};
//!
//! let theme = NavbarConfig {
//!     nav: vec![RawNavItem::link("Guide", "/guide/")],
//!     repo: Some("acme/widget".to_owned()),
//!     ..Default::default()
//! };
//! let mut locales = LocaleMap::new();
//! locales.insert("/".to_owned(), LocaleDescriptor::new("/", "en-US"));
//! locales.insert("/fr/".to_owned(), LocaleDescriptor::new("/fr/", "fr-FR"));
//! let routes: HashSet<String> = ["/guide/".to_owned(), "/fr/guide/".to_owned()].into();
//!
//! let navbar = Navbar::build(&theme, &locales, "/guide/", &routes);
//!
//! assert_eq!(navbar.links.len(), 2);
//! assert_eq!(navbar.links[1].items[1].link.as_deref(), Some("/fr/guide/"));
//! assert_eq!(navbar.repo.unwrap().label, "GitHub");
//! ```

mod entry;
mod locale;
mod navbar;
mod repo;
mod resolve;

pub use entry::{NavEntry, NavKind, RawNavItem};
pub use locale::{
    DEFAULT_ARIA_LABEL, DEFAULT_SELECT_TEXT, KnownRoutes, LocaleDescriptor, LocaleMap,
    SwitcherText, detect_locale_prefix, merge_locale_switcher, merge_locale_switcher_with,
};
pub use navbar::{Navbar, NavbarConfig, RepoLink};
pub use repo::{FALLBACK_REPO_LABEL, derive_repo_label, derive_repo_link};
pub use resolve::{resolve_item, resolve_links};
