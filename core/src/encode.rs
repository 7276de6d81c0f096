//! Percent-encoding and entry-sorting rules shared across signing schemes.
//!
//! OAuth 1.0a and AWS SigV4 both canonicalize key/value pairs with the same
//! strict unreserved set before hashing, so the primitives live here. Each
//! scheme still decides which keys participate: OAuth1 merges the query with
//! its `oauth_*` parameters, AWS transforms the query only and never the
//! body.

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// AsciiSet escaping every byte except the unreserved characters
/// `A-Z`, `a-z`, `0-9`, `-`, `.`, `_` and `~`.
///
/// This is stricter than standard URI encoding: `!*'()` are escaped too,
/// as both [OAuth 1.0a](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)
/// and [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
/// require.
pub static UNRESERVED_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string with [`UNRESERVED_ENCODE_SET`], uppercase hex.
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, &UNRESERVED_ENCODE_SET).to_string()
}

/// Percent-encode both sides of every entry, then sort byte-wise by encoded
/// key, and by encoded value for equal keys. No locale is involved.
pub fn sort_encoded_entries(entries: &[(String, String)]) -> Vec<(String, String)> {
    let mut encoded: Vec<(String, String)> = entries
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    encoded
}
