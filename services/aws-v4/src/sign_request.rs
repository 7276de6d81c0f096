use crate::constants::{AWS_SIGN_ALGORITHM, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use crate::Credential;
use apisign_core::encode::sort_encoded_entries;
use apisign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use apisign_core::time::{format_date, format_iso8601, now, DateTime};
use apisign_core::{Result, SignRequest, SignedAuth, SigningRequest};
use http::{header, HeaderName, HeaderValue};
use log::debug;
use std::fmt::Write;

/// RequestSigner that implements AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Every step feeds the next: a single wrong byte in the canonical request
/// (header casing, a trailing newline, the encoding table) invalidates the
/// whole signature. The canonical URI is the URL path taken verbatim, with
/// no dot-segment normalization. Signed headers are exactly the headers
/// carried by the request envelope.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new AWS V4 signer.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<SignedAuth> {
        let now = self.time.unwrap_or_else(now);
        let amz_date = format_iso8601(now);

        let creq = canonical_request_string(req)?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/aws4_request",
            format_date(now),
            cred.region,
            cred.service
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{AWS_SIGN_ALGORITHM}")?;
            writeln!(f, "{amz_date}")?;
            writeln!(f, "{scope}")?;
            write!(f, "{encoded_req}")?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &cred.region, &cred.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut auth = SignedAuth::new();
        auth.push_sensitive(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!(
                "{AWS_SIGN_ALGORITHM} Credential={}/{}, SignedHeaders={}, Signature={}",
                cred.access_key_id,
                scope,
                req.header_name_to_vec_sorted().join(";"),
                signature
            ))?,
        );
        auth.push(
            HeaderName::from_static(X_AMZ_DATE),
            HeaderValue::from_str(&amz_date)?,
        );
        if let Some(token) = &cred.session_token {
            auth.push_sensitive(
                HeaderName::from_static(X_AMZ_SECURITY_TOKEN),
                HeaderValue::from_str(token)?,
            );
        }

        Ok(auth)
    }
}

fn canonical_request_string(req: &SigningRequest) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", req.method)?;
    // Insert path, taken verbatim
    writeln!(f, "{}", req.path)?;
    // Insert encoded and sorted query
    writeln!(
        f,
        "{}",
        sort_encoded_entries(&req.query)
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    )?;
    // Insert canonical headers
    let signed_headers = req.header_name_to_vec_sorted();
    for name in signed_headers.iter() {
        writeln!(f, "{}:{}", name, req.header_get_trimmed(name)?)?;
    }
    writeln!(f)?;
    // Insert signed headers
    writeln!(f, "{}", signed_headers.join(";"))?;
    // Insert payload hash, the hash of the empty string when there is
    // no body.
    write!(f, "{}", hex_sha256(req.body.as_deref().unwrap_or_default()))?;

    Ok(f)
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
