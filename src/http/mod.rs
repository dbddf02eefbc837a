//! HTTP header names and header-collection helpers.

pub mod canonical;
pub mod headers;
pub mod names;
pub mod table;

pub use canonical::canonical_header_key;
pub use headers::{HeaderCollection, Headers, add, del, get, set, values};
