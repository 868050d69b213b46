//! Path segment encoding for identifiers interpolated into API paths.
//!
//! Dashboard UIDs come from checkpoint files that may have been edited by
//! hand. A raw `a?x` or `a/b` would change which resource the request hits,
//! so every UID is encoded as a single opaque segment.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// RFC 3986 reserved and unsafe characters that may not appear raw in a segment.
pub const UID_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'+')
    .add(b',')
    .add(b';');

/// Percent-encode `segment` so it stays one path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, UID_SEGMENT).to_string()
}

/// `/api/dashboards/uid/{uid}` with the UID encoded.
pub fn dashboard_uid_path(uid: &str) -> String {
    format!("/api/dashboards/uid/{}", encode_path_segment(uid))
}
