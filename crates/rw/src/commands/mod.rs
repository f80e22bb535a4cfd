//! CLI command implementations.

pub(crate) mod navbar;

pub(crate) use navbar::NavbarArgs;
