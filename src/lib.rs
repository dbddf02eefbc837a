//! Canonical HTTP header-name constants and small accessors for
//! multi-valued header collections.
//!
//! ```
//! use std::collections::HashMap;
//! use httpheaders::http::{names, get, set};
//!
//! let mut h: HashMap<String, Vec<String>> = HashMap::new();
//! set(&mut h, names::UserAgent, "curl/8.0");
//! assert_eq!(get(&h, names::UserAgent), "curl/8.0");
//! ```
//!
//! The constants in [`http::names`] are produced by the [`codegen`] module, run
//! through the `httpheaders-gen` binary.

pub mod config;
pub mod codegen;
pub mod http;

pub use http::names;
