//! Helpers over multi-valued header collections.
//!
//! A header collection maps a header name to the ordered list of its values.
//! The helpers in this module mirror the usual get/set/add/del accessors of an
//! HTTP header map, but work directly on any type implementing
//! [`HeaderCollection`], mutating the caller's structure in place.
//!
//! Keys are case sensitive. No canonicalization is applied: callers are
//! expected to pass canonical names, typically the constants from
//! [`names`](crate::http::names).
//!
//! A key that is absent reads the same as a key holding an empty list:
//! [`get`] returns `""` and [`values`] returns an empty slice.
//!
//! None of these helpers synchronize. A collection shared between threads
//! needs the caller's own locking around each call.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A mapping from header name to an ordered sequence of values.
pub trait HeaderCollection {
    /// Values stored under `key`, if the key is present.
    fn lookup(&self, key: &str) -> Option<&Vec<String>>;

    /// Values stored under `key`, inserting an empty list first if absent.
    fn lookup_or_insert(&mut self, key: &str) -> &mut Vec<String>;

    /// Stores `values` under `key`, dropping whatever was there.
    fn replace_all(&mut self, key: &str, values: Vec<String>);

    /// Drops `key` and all its values.
    fn remove_all(&mut self, key: &str);
}

impl<S: BuildHasher> HeaderCollection for HashMap<String, Vec<String>, S> {
    fn lookup(&self, key: &str) -> Option<&Vec<String>> {
        self.get(key)
    }

    fn lookup_or_insert(&mut self, key: &str) -> &mut Vec<String> {
        self.entry(key.to_string()).or_default()
    }

    fn replace_all(&mut self, key: &str, values: Vec<String>) {
        self.insert(key.to_string(), values);
    }

    fn remove_all(&mut self, key: &str) {
        self.remove(key);
    }
}

impl<S: BuildHasher> HeaderCollection for IndexMap<String, Vec<String>, S> {
    fn lookup(&self, key: &str) -> Option<&Vec<String>> {
        self.get(key)
    }

    fn lookup_or_insert(&mut self, key: &str) -> &mut Vec<String> {
        self.entry(key.to_string()).or_default()
    }

    fn replace_all(&mut self, key: &str, values: Vec<String>) {
        self.insert(key.to_string(), values);
    }

    // Keeps the relative order of the remaining headers.
    fn remove_all(&mut self, key: &str) {
        self.shift_remove(key);
    }
}

/// An absent collection reads as empty. Writing to it creates the collection.
impl<M> HeaderCollection for Option<M>
where
    M: HeaderCollection + Default,
{
    fn lookup(&self, key: &str) -> Option<&Vec<String>> {
        self.as_ref().and_then(|h| h.lookup(key))
    }

    fn lookup_or_insert(&mut self, key: &str) -> &mut Vec<String> {
        self.get_or_insert_with(M::default).lookup_or_insert(key)
    }

    fn replace_all(&mut self, key: &str, values: Vec<String>) {
        self.get_or_insert_with(M::default).replace_all(key, values);
    }

    fn remove_all(&mut self, key: &str) {
        if let Some(h) = self {
            h.remove_all(key);
        }
    }
}

/// Appends `value` to the values of `key`, creating the entry if needed.
pub fn add<H: HeaderCollection + ?Sized>(h: &mut H, key: &str, value: &str) {
    h.lookup_or_insert(key).push(value.to_string());
}

/// Deletes `key` and all of its values. Deleting a missing key is a no-op.
pub fn del<H: HeaderCollection + ?Sized>(h: &mut H, key: &str) {
    h.remove_all(key);
}

/// Returns the first value of `key`, or `""` when there is none.
pub fn get<'a, H: HeaderCollection + ?Sized>(h: &'a H, key: &str) -> &'a str {
    h.lookup(key)
        .and_then(|v| v.first())
        .map(String::as_str)
        .unwrap_or("")
}

/// Replaces the values of `key` with the single `value`.
pub fn set<H: HeaderCollection + ?Sized>(h: &mut H, key: &str, value: &str) {
    h.replace_all(key, vec![value.to_string()]);
}

/// Returns every value of `key`. The slice borrows the stored list, it is not a copy.
pub fn values<'a, H: HeaderCollection + ?Sized>(h: &'a H, key: &str) -> &'a [String] {
    h.lookup(key).map(Vec::as_slice).unwrap_or(&[])
}

/// Ordered header collection.
///
/// Entries keep their insertion order, so iterating reproduces the order in
/// which headers were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    headers: IndexMap<String, Vec<String>>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn add(&mut self, key: &str, value: &str) {
        add(&mut self.headers, key, value);
    }

    pub fn del(&mut self, key: &str) {
        del(&mut self.headers, key);
    }

    pub fn get(&self, key: &str) -> &str {
        get(&self.headers, key)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        set(&mut self.headers, key, value);
    }

    pub fn values(&self, key: &str) -> &[String] {
        values(&self.headers, key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.headers
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl HeaderCollection for Headers {
    fn lookup(&self, key: &str) -> Option<&Vec<String>> {
        self.headers.lookup(key)
    }

    fn lookup_or_insert(&mut self, key: &str) -> &mut Vec<String> {
        self.headers.lookup_or_insert(key)
    }

    fn replace_all(&mut self, key: &str, values: Vec<String>) {
        self.headers.replace_all(key, values);
    }

    fn remove_all(&mut self, key: &str) {
        self.headers.remove_all(key);
    }
}
