//! Minimal reader for S3 `ListBucketResult` documents.
//!
//! Only the fields the glob loop consumes are extracted: the
//! `IsTruncated` flag and the `Key` of each `Contents` node. This is not
//! a general XML parser; anything outside those elements is ignored.

use crate::error::{StoreError, StoreResult};

const BAD_RESPONSE: &str = "unexpected contents in bucket listing response";

/// One page of a bucket listing.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Listing {
    /// More results exist beyond this page.
    pub truncated: bool,
    /// Object keys in this page, in document order.
    pub keys: Vec<String>,
}

/// Parse a listing page.
///
/// Fails with a protocol error when the top-level listing node is absent,
/// when no `Contents` node is present, or when a `Contents` node lacks a
/// `Key`.
pub(crate) fn parse_listing(xml: &str) -> StoreResult<Listing> {
    let (body, _) = next_element(xml, "ListBucketResult")
        .ok_or_else(|| StoreError::Protocol(BAD_RESPONSE.to_string()))?;

    let truncated = next_element(body, "IsTruncated")
        .map(|(flag, _)| flag.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let mut keys = Vec::new();
    let mut rest = body;
    while let Some((contents, after)) = next_element(rest, "Contents") {
        let (key, _) = next_element(contents, "Key")
            .ok_or_else(|| StoreError::Protocol(BAD_RESPONSE.to_string()))?;
        keys.push(unescape(key.trim()));
        rest = after;
    }

    if keys.is_empty() {
        return Err(StoreError::Protocol(BAD_RESPONSE.to_string()));
    }

    Ok(Listing { truncated, keys })
}

/// Find the first `name` element in `xml`; return its content and the
/// remaining text after its closing tag.
fn next_element<'a>(xml: &'a str, name: &str) -> Option<(&'a str, &'a str)> {
    let open = format!("<{name}");
    let close = format!("</{name}>");

    let mut search = 0;
    loop {
        let start = xml[search..].find(&open)? + search;
        let after_name = start + open.len();

        match xml.as_bytes().get(after_name) {
            // `<Name>`: content starts immediately.
            Some(b'>') => {
                let content_start = after_name + 1;
                let end = xml[content_start..].find(&close)? + content_start;
                return Some((&xml[content_start..end], &xml[end + close.len()..]));
            }
            // `<Name attr=...>` or `<Name ... />`.
            Some(b) if b.is_ascii_whitespace() => {
                let gt = xml[after_name..].find('>')? + after_name;
                if xml.as_bytes()[gt - 1] == b'/' {
                    return Some(("", &xml[gt + 1..]));
                }
                let content_start = gt + 1;
                let end = xml[content_start..].find(&close)? + content_start;
                return Some((&xml[content_start..end], &xml[end + close.len()..]));
            }
            // A longer tag name sharing this prefix; keep scanning.
            _ => search = after_name,
        }
    }
}

/// Decode the five predefined XML entities found in object keys.
fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
