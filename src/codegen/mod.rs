//! Offline generator for [`http::names`](crate::http::names).
//!
//! The generator takes a fixed list of well-known header names, sorts it,
//! canonicalizes each name and renders one Rust constant per header. It only
//! runs when the table needs to be refreshed (see the `httpheaders-gen`
//! binary) and is never part of a request path.
//!
//! Apart from the optional timestamp line, rendering the same list always
//! produces the same bytes.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;

use crate::config::GenConfig;
use crate::http::canonical::{canonical_header_key, make_ident};

/// Header names the constant table is generated from.
pub const COMMON_HEADERS: &[&str] = &[
    "Accept",
    "Accept-Charset",
    "Accept-Encoding",
    "Accept-Language",
    "Accept-Ranges",
    "Access-Control-Allow-Credentials",
    "Access-Control-Allow-Headers",
    "Access-Control-Allow-Methods",
    "Access-Control-Allow-Origin",
    "Access-Control-Max-Age",
    "Alt-Svc",
    "Age",
    "Authorization",
    "Cache-Control",
    "Connection",
    "Content-Disposition",
    "Content-Encoding",
    "Content-Language",
    "Content-Length",
    "Content-Range",
    "Content-Security-Policy",
    "Content-Security-Policy-Report-Only",
    "Content-Type",
    "Cookie",
    "Date",
    "Dnt",
    "Etag",
    "Expect-Ct",
    "Expect",
    "Expires",
    "Forwarded",
    "Host",
    "If-Match",
    "If-Modified-Since",
    "If-None-Match",
    "If-Unmodified-Since",
    "Keep-Alive",
    "Last-Modified",
    "Link",
    "Location",
    "Origin",
    "Pragma",
    "Referer",
    "Request-Id",
    "Retry-After",
    "Server",
    "Set-Cookie",
    "Strict-Transport-Security",
    "Upgrade",
    "User-Agent",
    "Vary",
    "Via",
    "Www-Authenticate",
    "X-Content-Type-Options",
    "X-Frame-Options",
    "X-Forwarded-For",
    "X-Forwarded-Host",
    "X-Forwarded-Proto",
];

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "// Code generated by httpheaders-gen; DO NOT EDIT.";

/// Prefix of the informational timestamp line.
pub const TIMESTAMP_PREFIX: &str = "// Generated at ";

#[derive(thiserror::Error, Debug)]
pub enum GenError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One row of the constant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub ident: String,
    pub value: String,
}

/// Sorts `names` and turns each into a table entry.
pub fn entries(names: &[&str]) -> Vec<Entry> {
    let mut sorted = names.to_vec();
    sorted.sort_unstable();

    sorted
        .into_iter()
        .map(|name| {
            let value = canonical_header_key(name);
            Entry {
                ident: make_ident(&value),
                value,
            }
        })
        .collect()
}

/// Renders the Rust source of the constant table.
pub fn render(entries: &[Entry], timestamp: Option<SystemTime>) -> String {
    let mut out = String::new();

    out.push_str(GENERATED_MARKER);
    out.push('\n');
    if let Some(ts) = timestamp {
        out.push_str(TIMESTAMP_PREFIX);
        out.push_str(&httpdate::fmt_http_date(ts));
        out.push('\n');
    }
    out.push_str("\n#![allow(non_upper_case_globals)]\n\n");

    for e in entries {
        out.push_str(&format!("pub const {}: &str = \"{}\";\n", e.ident, e.value));
    }

    // rustfmt would split the longer pairs over several lines
    out.push_str("\n/// Every header constant as an `(identifier, name)` pair, in sorted order.\n");
    out.push_str("#[rustfmt::skip]\n");
    out.push_str("pub const ALL: &[(&str, &str)] = &[\n");
    for e in entries {
        out.push_str(&format!("    (\"{}\", \"{}\"),\n", e.ident, e.value));
    }
    out.push_str("];\n");

    out
}

/// Drops the timestamp line from generated source, leaving only the part
/// that must be identical between runs.
pub fn strip_timestamp(source: &str) -> String {
    source
        .split_inclusive('\n')
        .filter(|line| !line.starts_with(TIMESTAMP_PREFIX))
        .collect()
}

/// Renders the table described by `config` and writes it to `config.output`.
pub fn generate(config: &GenConfig) -> Result<PathBuf, GenError> {
    let table = entries(COMMON_HEADERS);
    log::debug!("rendering {} header constants", table.len());

    let timestamp = config.timestamp.then(SystemTime::now);
    let source = render(&table, timestamp);

    let path = config.output.clone();
    std::fs::write(&path, source).map_err(|source| GenError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());

    if config.rustfmt {
        format(&path);
    }

    Ok(path)
}

// Formatting is cosmetic, the rendered file is already valid.
fn format(path: &Path) {
    match Command::new("rustfmt").arg("--edition=2024").arg(path).status() {
        Ok(status) if status.success() => log::debug!("formatted {}", path.display()),
        Ok(status) => log::warn!("rustfmt exited with {status}"),
        Err(err) => log::warn!("cannot run rustfmt: {err}"),
    }
}
