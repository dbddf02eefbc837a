//! Process-wide lookup over the generated header constants.
//!
//! Both maps are built once, on first use, from [`names::ALL`] and are never
//! mutated afterwards.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;

use crate::http::names;

static BY_IDENT: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| names::ALL.iter().copied().collect());

static NAMES: Lazy<IndexSet<&'static str>> =
    Lazy::new(|| names::ALL.iter().map(|&(_, name)| name).collect());

/// Canonical header name for a symbolic identifier such as `"UserAgent"`.
pub fn lookup(ident: &str) -> Option<&'static str> {
    BY_IDENT.get(ident).copied()
}

/// Whether `name` is one of the well-known canonical header names.
/// The comparison is case sensitive.
pub fn is_common(name: &str) -> bool {
    NAMES.contains(name)
}

/// All `(identifier, name)` pairs in table order.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static str)> {
    BY_IDENT.iter().map(|(&ident, &name)| (ident, name))
}
