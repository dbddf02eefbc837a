// Code generated by httpheaders-gen; DO NOT EDIT.
// Generated at Fri, 16 Oct 2026 09:12:44 GMT

#![allow(non_upper_case_globals)]

pub const Accept: &str = "Accept";
pub const AcceptCharset: &str = "Accept-Charset";
pub const AcceptEncoding: &str = "Accept-Encoding";
pub const AcceptLanguage: &str = "Accept-Language";
pub const AcceptRanges: &str = "Accept-Ranges";
pub const AccessControlAllowCredentials: &str = "Access-Control-Allow-Credentials";
pub const AccessControlAllowHeaders: &str = "Access-Control-Allow-Headers";
pub const AccessControlAllowMethods: &str = "Access-Control-Allow-Methods";
pub const AccessControlAllowOrigin: &str = "Access-Control-Allow-Origin";
pub const AccessControlMaxAge: &str = "Access-Control-Max-Age";
pub const Age: &str = "Age";
pub const AltSvc: &str = "Alt-Svc";
pub const Authorization: &str = "Authorization";
pub const CacheControl: &str = "Cache-Control";
pub const Connection: &str = "Connection";
pub const ContentDisposition: &str = "Content-Disposition";
pub const ContentEncoding: &str = "Content-Encoding";
pub const ContentLanguage: &str = "Content-Language";
pub const ContentLength: &str = "Content-Length";
pub const ContentRange: &str = "Content-Range";
pub const ContentSecurityPolicy: &str = "Content-Security-Policy";
pub const ContentSecurityPolicyReportOnly: &str = "Content-Security-Policy-Report-Only";
pub const ContentType: &str = "Content-Type";
pub const Cookie: &str = "Cookie";
pub const Date: &str = "Date";
pub const Dnt: &str = "Dnt";
pub const Etag: &str = "Etag";
pub const Expect: &str = "Expect";
pub const ExpectCt: &str = "Expect-Ct";
pub const Expires: &str = "Expires";
pub const Forwarded: &str = "Forwarded";
pub const Host: &str = "Host";
pub const IfMatch: &str = "If-Match";
pub const IfModifiedSince: &str = "If-Modified-Since";
pub const IfNoneMatch: &str = "If-None-Match";
pub const IfUnmodifiedSince: &str = "If-Unmodified-Since";
pub const KeepAlive: &str = "Keep-Alive";
pub const LastModified: &str = "Last-Modified";
pub const Link: &str = "Link";
pub const Location: &str = "Location";
pub const Origin: &str = "Origin";
pub const Pragma: &str = "Pragma";
pub const Referer: &str = "Referer";
pub const RequestId: &str = "Request-Id";
pub const RetryAfter: &str = "Retry-After";
pub const Server: &str = "Server";
pub const SetCookie: &str = "Set-Cookie";
pub const StrictTransportSecurity: &str = "Strict-Transport-Security";
pub const Upgrade: &str = "Upgrade";
pub const UserAgent: &str = "User-Agent";
pub const Vary: &str = "Vary";
pub const Via: &str = "Via";
pub const WwwAuthenticate: &str = "Www-Authenticate";
pub const XContentTypeOptions: &str = "X-Content-Type-Options";
pub const XForwardedFor: &str = "X-Forwarded-For";
pub const XForwardedHost: &str = "X-Forwarded-Host";
pub const XForwardedProto: &str = "X-Forwarded-Proto";
pub const XFrameOptions: &str = "X-Frame-Options";

/// Every header constant as an `(identifier, name)` pair, in sorted order.
#[rustfmt::skip]
pub const ALL: &[(&str, &str)] = &[
    ("Accept", "Accept"),
    ("AcceptCharset", "Accept-Charset"),
    ("AcceptEncoding", "Accept-Encoding"),
    ("AcceptLanguage", "Accept-Language"),
    ("AcceptRanges", "Accept-Ranges"),
    ("AccessControlAllowCredentials", "Access-Control-Allow-Credentials"),
    ("AccessControlAllowHeaders", "Access-Control-Allow-Headers"),
    ("AccessControlAllowMethods", "Access-Control-Allow-Methods"),
    ("AccessControlAllowOrigin", "Access-Control-Allow-Origin"),
    ("AccessControlMaxAge", "Access-Control-Max-Age"),
    ("Age", "Age"),
    ("AltSvc", "Alt-Svc"),
    ("Authorization", "Authorization"),
    ("CacheControl", "Cache-Control"),
    ("Connection", "Connection"),
    ("ContentDisposition", "Content-Disposition"),
    ("ContentEncoding", "Content-Encoding"),
    ("ContentLanguage", "Content-Language"),
    ("ContentLength", "Content-Length"),
    ("ContentRange", "Content-Range"),
    ("ContentSecurityPolicy", "Content-Security-Policy"),
    ("ContentSecurityPolicyReportOnly", "Content-Security-Policy-Report-Only"),
    ("ContentType", "Content-Type"),
    ("Cookie", "Cookie"),
    ("Date", "Date"),
    ("Dnt", "Dnt"),
    ("Etag", "Etag"),
    ("Expect", "Expect"),
    ("ExpectCt", "Expect-Ct"),
    ("Expires", "Expires"),
    ("Forwarded", "Forwarded"),
    ("Host", "Host"),
    ("IfMatch", "If-Match"),
    ("IfModifiedSince", "If-Modified-Since"),
    ("IfNoneMatch", "If-None-Match"),
    ("IfUnmodifiedSince", "If-Unmodified-Since"),
    ("KeepAlive", "Keep-Alive"),
    ("LastModified", "Last-Modified"),
    ("Link", "Link"),
    ("Location", "Location"),
    ("Origin", "Origin"),
    ("Pragma", "Pragma"),
    ("Referer", "Referer"),
    ("RequestId", "Request-Id"),
    ("RetryAfter", "Retry-After"),
    ("Server", "Server"),
    ("SetCookie", "Set-Cookie"),
    ("StrictTransportSecurity", "Strict-Transport-Security"),
    ("Upgrade", "Upgrade"),
    ("UserAgent", "User-Agent"),
    ("Vary", "Vary"),
    ("Via", "Via"),
    ("WwwAuthenticate", "Www-Authenticate"),
    ("XContentTypeOptions", "X-Content-Type-Options"),
    ("XForwardedFor", "X-Forwarded-For"),
    ("XForwardedHost", "X-Forwarded-Host"),
    ("XForwardedProto", "X-Forwarded-Proto"),
    ("XFrameOptions", "X-Frame-Options"),
];
