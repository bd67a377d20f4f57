//! Share links carrying a sealed message (and optionally its password).
//!
//! Links look like `{base}/?share=<wire>&key=<base64(password)>`, with both
//! values percent-encoded. Embedding the password is the caller's choice.

use std::borrow::Cow;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const SHARE_PARAM: &str = "share";
const KEY_PARAM: &str = "key";

/// Build a share link for `ciphertext`, optionally embedding `embed_password`.
///
/// # Examples
///
/// ```
/// use cryptnote_core::share::build_share_link;
///
/// let link = build_share_link("https://example.com/", "a+b", None);
/// assert_eq!(link, "https://example.com/?share=a%2Bb");
/// ```
pub fn build_share_link(base_url: &str, ciphertext: &str, embed_password: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    let mut link = format!(
        "{}/?{}={}",
        base,
        SHARE_PARAM,
        urlencoding::encode(ciphertext)
    );

    if let Some(password) = embed_password {
        let encoded = STANDARD.encode(password.as_bytes());
        link.push_str(&format!("&{}={}", KEY_PARAM, urlencoding::encode(&encoded)));
    }

    link
}

/// Content recovered from a share link.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SharedContent {
    /// The sealed message, if the link carried one
    pub content: Option<String>,
    /// The embedded password, if present and decodable
    pub key: Option<String>,
}

impl fmt::Debug for SharedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedContent")
            .field("content", &self.content)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Extract the `share` and `key` parameters from a URL.
///
/// Never fails: a missing, empty or undecodable parameter comes back as
/// `None`. Only the first occurrence of each parameter is considered.
pub fn extract_share_from_url(url: &str) -> SharedContent {
    let Some(query) = query_string(url) else {
        return SharedContent::default();
    };

    let content = first_param(query, SHARE_PARAM)
        .and_then(percent_decode)
        .filter(|value| !value.is_empty());

    let key = first_param(query, KEY_PARAM)
        .and_then(percent_decode)
        .and_then(|encoded| STANDARD.decode(encoded.as_bytes()).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .filter(|value| !value.is_empty());

    SharedContent { content, key }
}

fn query_string(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once('?')?;
    let query = rest.split('#').next().unwrap_or_default();
    Some(query)
}

fn first_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| match pair.split_once('=') {
            Some((key, value)) => Some((key, value)),
            None if !pair.is_empty() => Some((pair, "")),
            None => None,
        })
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn percent_decode(value: &str) -> Option<String> {
    urlencoding::decode(value).ok().map(Cow::into_owned)
}
