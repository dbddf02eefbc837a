//! Canonical header-name casing.
//!
//! A canonical header name has its first letter and every letter following a
//! hyphen in upper case, and every other letter in lower case
//! (`content-type` becomes `Content-Type`).

/// Returns `true` for bytes allowed in an HTTP token (RFC 7230 `tchar`).
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

/// Canonicalizes the casing of a header name.
///
/// Names containing a byte that is not a valid token byte (spaces, colons,
/// non-ASCII, ...) are returned unchanged.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

/// Derives the symbolic identifier of a canonical header name by dropping
/// its hyphens (`User-Agent` becomes `UserAgent`).
pub fn make_ident(canonical: &str) -> String {
    canonical.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_each_segment() {
        assert_eq!(canonical_header_key("content-type"), "Content-Type");
        assert_eq!(canonical_header_key("USER-AGENT"), "User-Agent");
        assert_eq!(canonical_header_key("x-forwarded-for"), "X-Forwarded-For");
        assert_eq!(canonical_header_key("etag"), "Etag");
        assert_eq!(canonical_header_key("WWW-Authenticate"), "Www-Authenticate");
    }

    #[test]
    fn handles_edge_hyphens() {
        assert_eq!(canonical_header_key(""), "");
        assert_eq!(canonical_header_key("-foo"), "-Foo");
        assert_eq!(canonical_header_key("foo-"), "Foo-");
        assert_eq!(canonical_header_key("a--b"), "A--B");
    }

    #[test]
    fn leaves_invalid_names_untouched() {
        assert_eq!(canonical_header_key("content type"), "content type");
        assert_eq!(canonical_header_key("foo:bar"), "foo:bar");
        assert_eq!(canonical_header_key("héader"), "héader");
    }

    #[test]
    fn is_idempotent() {
        for name in ["accept-ranges", "Keep-Alive", "dNT", "x-frame-OPTIONS"] {
            let once = canonical_header_key(name);
            assert_eq!(canonical_header_key(&once), once);
        }
    }

    #[test]
    fn ident_drops_hyphens() {
        assert_eq!(make_ident("User-Agent"), "UserAgent");
        assert_eq!(
            make_ident("Content-Security-Policy-Report-Only"),
            "ContentSecurityPolicyReportOnly"
        );
        assert_eq!(make_ident("Host"), "Host");
    }
}
