use crate::{Algorithm, Credential};
use apisign_core::hash::base64_hmac_sha256;
use apisign_core::time::{now, unix_timestamp};
use apisign_core::utils::gen_nonce;
use apisign_core::{Result, SignRequest, SignedAuth, SigningRequest};
use http::{header, HeaderValue};
use log::debug;
use std::fmt::Write;

/// RequestSigner that implements the Hawk header scheme.
///
/// - [Hawk HTTP authentication](https://github.com/mozilla/hawk)
///
/// Note: `ext`, when present, is appended to the header but not folded
/// into the MAC. The normalized string keeps an empty ext slot, so fixing
/// this deviation one day only touches that line. Preserved deliberately;
/// do not change without a failing compatibility test.
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new Hawk signer.
    pub fn new() -> Self {
        Self {}
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<SignedAuth> {
        let timestamp = cred.timestamp.unwrap_or_else(|| unix_timestamp(now()));
        let nonce = cred.nonce.clone().unwrap_or_else(|| gen_nonce(8));

        let normalized = normalized_string(req, timestamp, &nonce, cred.app.as_deref())?;
        debug!("calculated normalized string: {normalized}");

        let mac = match cred.algorithm {
            Algorithm::Sha256 => {
                base64_hmac_sha256(cred.key.as_bytes(), normalized.as_bytes())
            }
        };

        let mut authorization = format!(
            "Hawk id=\"{}\", ts=\"{}\", nonce=\"{}\", mac=\"{}\"",
            cred.id, timestamp, nonce, mac
        );
        if let Some(ext) = &cred.ext {
            write!(authorization, ", ext=\"{ext}\"")?;
        }

        let mut auth = SignedAuth::new();
        auth.push_sensitive(header::AUTHORIZATION, HeaderValue::from_str(&authorization)?);

        Ok(auth)
    }
}

/// Construct the `hawk.1.header` normalized string.
///
/// ## Format
///
/// ```text
/// hawk.1.header\n
/// timestamp\n
/// nonce\n
/// METHOD\n
/// path?query\n
/// hostname\n
/// port\n
/// <payload hash slot, empty>\n
/// <ext slot, empty>\n
/// app-or-empty\n
/// ```
fn normalized_string(
    req: &SigningRequest,
    timestamp: i64,
    nonce: &str,
    app: Option<&str>,
) -> Result<String> {
    let mut f = String::with_capacity(128);

    writeln!(f, "hawk.1.header")?;
    writeln!(f, "{timestamp}")?;
    writeln!(f, "{nonce}")?;
    writeln!(f, "{}", req.method)?;
    writeln!(f, "{}", req.path_and_query())?;
    writeln!(f, "{}", req.host())?;
    writeln!(f, "{}", req.port())?;
    writeln!(f)?;
    writeln!(f)?;
    writeln!(f, "{}", app.unwrap_or_default())?;

    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use pretty_assertions::assert_eq;

    fn test_credential() -> Credential {
        Credential {
            id: "dh37fgj492je".to_string(),
            key: "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn".to_string(),
            algorithm: Algorithm::Sha256,
            app: None,
            ext: None,
            nonce: Some("j4h3g2".to_string()),
            timestamp: Some(1353832234),
        }
    }

    fn test_request() -> SigningRequest {
        SigningRequest::parse(Method::GET, "https://example.com:8000/resource/1?b=1&a=2")
            .expect("url must be valid")
    }

    #[test]
    fn test_normalized_string() {
        let s = normalized_string(&test_request(), 1353832234, "j4h3g2", None).unwrap();

        assert_eq!(
            s,
            "hawk.1.header\n1353832234\nj4h3g2\nGET\n/resource/1?b=1&a=2\nexample.com\n8000\n\n\n\n"
        );
    }

    #[test]
    fn test_sign() {
        let _ = env_logger::builder().is_test(true).try_init();

        let auth = RequestSigner::new()
            .sign_request(&test_request(), &test_credential())
            .expect("must sign");

        assert_eq!(auth.len(), 1);
        assert_eq!(
            auth.get("authorization").unwrap(),
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
             mac=\"GCFRaLojGDlGzzMkS6nILS11YRVXmTRT787SE5Cj2QE=\""
        );
        assert!(auth.get("authorization").unwrap().is_sensitive());
    }

    #[test]
    fn test_app_changes_mac() {
        let mut cred = test_credential();
        cred.app = Some("my-app".to_string());

        let auth = RequestSigner::new()
            .sign_request(&test_request(), &cred)
            .unwrap();

        assert_eq!(
            auth.get("authorization").unwrap(),
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
             mac=\"6rq4D4hE5NslCBKY7GkI0Beugzj6kd0sTuBPZGagSkg=\""
        );
    }

    #[test]
    fn test_ext_in_header_not_in_mac() {
        let mut cred = test_credential();
        cred.ext = Some("some-app-data".to_string());

        let auth = RequestSigner::new()
            .sign_request(&test_request(), &cred)
            .unwrap();

        // Same MAC as without ext, with the ext appended to the header.
        assert_eq!(
            auth.get("authorization").unwrap(),
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
             mac=\"GCFRaLojGDlGzzMkS6nILS11YRVXmTRT787SE5Cj2QE=\", ext=\"some-app-data\""
        );
    }

    #[test]
    fn test_any_field_changes_mac() {
        let base = RequestSigner::new()
            .sign_request(&test_request(), &test_credential())
            .unwrap();

        let mut ts_cred = test_credential();
        ts_cred.timestamp = Some(1353832235);
        let ts = RequestSigner::new()
            .sign_request(&test_request(), &ts_cred)
            .unwrap();
        assert_ne!(
            base.get("authorization").unwrap(),
            ts.get("authorization").unwrap()
        );

        let mut nonce_cred = test_credential();
        nonce_cred.nonce = Some("j4h3g3".to_string());
        let nonce = RequestSigner::new()
            .sign_request(&test_request(), &nonce_cred)
            .unwrap();
        assert_ne!(
            base.get("authorization").unwrap(),
            nonce.get("authorization").unwrap()
        );

        let post = SigningRequest::parse(
            Method::POST,
            "https://example.com:8000/resource/1?b=1&a=2",
        )
        .unwrap();
        let method = RequestSigner::new()
            .sign_request(&post, &test_credential())
            .unwrap();
        assert_ne!(
            base.get("authorization").unwrap(),
            method.get("authorization").unwrap()
        );
    }

    #[test]
    fn test_port_defaults() {
        let https = SigningRequest::parse(Method::GET, "https://example.com/a").unwrap();
        assert_eq!(https.port(), 443);
        let http = SigningRequest::parse(Method::GET, "http://example.com/a").unwrap();
        assert_eq!(http.port(), 80);

        let a = normalized_string(&https, 1, "n", None).unwrap();
        let b = normalized_string(&http, 1, "n", None).unwrap();
        assert!(a.contains("\n443\n"));
        assert!(b.contains("\n80\n"));
    }
}
