//! Percent-encoding for values interpolated into request paths.
//!
//! Component ids and the company id are caller supplied. Encoding them keeps
//! a `/` from adding path levels and a `?` or `#` from starting a query or
//! fragment.
//!
//! ```
//! use analytics_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("?"), "%3F");
//! assert_eq!(encode_path_segment("cm300003364_5ae7447df118f061698ddc31"), "cm300003364_5ae7447df118f061698ddc31");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a single path segment.
///
/// RFC 3986 section 3.3 plus characters that confuse proxies or would be
/// reinterpreted by the URL parser.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// Dots, hyphens, underscores, tildes, colons and commas pass through, which
/// covers every id format the Analytics API hands out (`evar1`,
/// `variables/page`, `amc.aem.prod`, `s300003364_5ae7447df118f061698ddc31`).
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Join a resource path with encoded trailing segments.
///
/// ```
/// use analytics_client::endpoints::url_encoding::resource_path;
///
/// assert_eq!(resource_path("segments", &["s1/2"]), "segments/s1%2F2");
/// ```
pub fn resource_path(base: &str, segments: &[&str]) -> String {
    let mut path = base.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&encode_path_segment(segment));
    }
    path
}
