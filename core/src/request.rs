use crate::{Error, Result};
use bytes::Bytes;
use http::header::HeaderName;
use http::uri::Authority;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;

/// The resolved request envelope a scheme signs.
///
/// All template placeholders (`{{...}}`) must already be substituted by the
/// caller; this type never interprets them. Query values are stored percent
/// decoded so schemes can re-encode them with their own rules, while
/// [`Self::path_and_query`] preserves the component exactly as it will be
/// sent.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method, uppercase.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority (host and optional port).
    pub authority: Authority,
    /// HTTP path, exactly as it appears in the URL.
    pub path: String,
    /// HTTP query parameters, percent decoded, in URL order.
    pub query: Vec<(String, String)>,
    /// Raw query component as it appeared in the URL, if any.
    pub raw_query: Option<String>,
    /// HTTP headers, as they will be sent.
    pub headers: HeaderMap,
    /// Raw request body, post substitution.
    pub body: Option<Bytes>,
}

impl SigningRequest {
    /// Build a signing request from a method and an absolute URL string.
    ///
    /// Fails with [`crate::ErrorKind::InvalidUrl`] when the URL cannot be
    /// parsed into scheme/host/path/query. No partial envelope is returned.
    pub fn parse(method: Method, url: &str) -> Result<Self> {
        let uri: Uri = url
            .parse()
            .map_err(|e| Error::invalid_url(format!("failed to parse url {url}: {e}")))?;
        let parts = uri.into_parts();

        let scheme = parts
            .scheme
            .ok_or_else(|| Error::invalid_url(format!("url {url} has no scheme")))?;
        let authority = parts
            .authority
            .ok_or_else(|| Error::invalid_url(format!("url {url} has no host")))?;

        let (path, raw_query) = match parts.path_and_query {
            Some(paq) => (paq.path().to_string(), paq.query().map(str::to_string)),
            None => ("/".to_string(), None),
        };

        Ok(SigningRequest {
            method,
            scheme,
            authority,
            path,
            query: raw_query
                .as_deref()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            raw_query,
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Build a signing request from `http::request::Parts`.
    ///
    /// The body is not part of `Parts`; attach it with [`Self::with_body`]
    /// when the scheme signs the payload.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self> {
        let mut req = Self::parse(parts.method.clone(), &parts.uri.to_string())?;
        req.headers = parts.headers.clone();

        Ok(req)
    }

    /// Attach a raw body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        self.headers
            .insert(HeaderName::try_from(name)?, HeaderValue::from_str(value)?);

        Ok(self)
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// The URL without its query component: `scheme://authority/path`.
    pub fn url_without_query(&self) -> String {
        format!("{}://{}{}", self.scheme, self.authority, self.path)
    }

    /// Path plus query, exactly as they will be sent.
    pub fn path_and_query(&self) -> String {
        match &self.raw_query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    /// Host without the port.
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// Explicit port when the URL carries one, otherwise 443 for https
    /// and 80 for everything else.
    pub fn port(&self) -> u16 {
        match self.authority.port_u16() {
            Some(p) => p,
            None if self.scheme == Scheme::HTTPS => 443,
            None => 80,
        }
    }

    /// Get header names as sorted vector.
    ///
    /// `HeaderName` is already lowercase, so this is the SigV4
    /// `SignedHeaders` order.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }

    /// Get a header value as a trimmed string.
    ///
    /// Returns empty string if header not found.
    pub fn header_get_trimmed(&self, key: &str) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?.trim_matches(' ')),
            None => Ok(""),
        }
    }
}

/// The headers a signer produced, to be merged into the outgoing request.
///
/// A single `Authorization` entry for OAuth1/Hawk/Digest, two or three
/// entries for AWS. `Authorization` and security-token values are marked
/// sensitive so http clients will not log them.
#[derive(Debug, Default, Clone)]
pub struct SignedAuth {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl SignedAuth {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header.
    pub fn push(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.push((name, value));
    }

    /// Append a header whose value must not be logged.
    pub fn push_sensitive(&mut self, name: HeaderName, mut value: HeaderValue) {
        value.set_sensitive(true);
        self.headers.push((name, value));
    }

    /// Get a header value by name.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Iterate over the produced headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter().map(|(k, v)| (k, v))
    }

    /// Number of produced headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether no headers were produced.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Merge the produced headers into a header map, replacing any
    /// existing entries of the same name.
    pub fn merge(self, headers: &mut HeaderMap) {
        for (name, value) in self.headers {
            headers.insert(name, value);
        }
    }

    /// Apply the produced headers to `http::request::Parts`.
    pub fn apply(self, parts: &mut http::request::Parts) {
        self.merge(&mut parts.headers);
    }
}
