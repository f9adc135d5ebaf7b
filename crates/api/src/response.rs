//! Success-response envelope.
//!
//! Every 2xx body is `{ "data": ... }`, whether it carries a project, a
//! section with its elements, a media listing, or a reorder outcome. Error
//! bodies use the `{ "error", "code" }` shape built in [`crate::error`]
//! instead; the two never mix, so clients can branch on the status code
//! alone.

use serde::Serialize;

/// Wrapper every handler returns its payload in.
///
/// Typed rather than assembled with `serde_json::json!` per call site, so a
/// handler cannot misspell the envelope key and serialization of the payload
/// is checked at compile time.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
