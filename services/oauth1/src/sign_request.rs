use crate::{Credential, SignatureMethod};
use apisign_core::encode::{percent_encode, sort_encoded_entries};
use apisign_core::hash::base64_hmac_sha1;
use apisign_core::time::{now, unix_timestamp};
use apisign_core::utils::gen_nonce;
use apisign_core::{Error, Result, SignRequest, SignedAuth, SigningRequest};
use http::{header, HeaderValue};
use log::debug;

/// RequestSigner that implements OAuth 1.0a.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://datatracker.ietf.org/doc/html/rfc5849)
///
/// Note: when a realm is supplied it participates in the signature base
/// string like any other `oauth_*` parameter. Strict OAuth 1.0 excludes
/// the realm from signing; this behavior is preserved deliberately and
/// must not change without a failing compatibility test against a real
/// provider.
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new OAuth1 signer.
    pub fn new() -> Self {
        Self {}
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<SignedAuth> {
        let timestamp = cred.timestamp.unwrap_or_else(|| unix_timestamp(now()));
        let nonce = cred.nonce.clone().unwrap_or_else(|| gen_nonce(16));

        let mut oauth_params: Vec<(String, String)> = vec![
            ("oauth_consumer_key".into(), cred.consumer_key.clone()),
            ("oauth_token".into(), cred.token.clone()),
            (
                "oauth_signature_method".into(),
                cred.signature_method.as_str().into(),
            ),
            ("oauth_timestamp".into(), timestamp.to_string()),
            ("oauth_nonce".into(), nonce),
            ("oauth_version".into(), "1.0".into()),
        ];
        if let Some(realm) = &cred.realm {
            oauth_params.push(("oauth_realm".into(), realm.clone()));
        }

        // One flat parameter set: request query plus oauth parameters,
        // encoded and sorted byte-wise.
        let mut params = oauth_params.clone();
        params.extend(req.query.iter().cloned());
        let parameter_string = sort_encoded_entries(&params)
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            req.method,
            percent_encode(&req.url_without_query()),
            percent_encode(&parameter_string)
        );
        debug!("calculated base string: {base_string}");

        let signing_key = format!(
            "{}&{}",
            percent_encode(&cred.consumer_secret),
            percent_encode(&cred.token_secret)
        );

        let signature = match cred.signature_method {
            SignatureMethod::HmacSha1 => {
                base64_hmac_sha1(signing_key.as_bytes(), base_string.as_bytes())
            }
            SignatureMethod::Plaintext => signing_key,
            SignatureMethod::RsaSha1 => {
                return Err(Error::unsupported_signature_method(
                    "oauth_signature_method RSA-SHA1 is not supported: no private key material is modeled",
                ));
            }
        };

        oauth_params.push(("oauth_signature".into(), signature));
        oauth_params.sort();

        let authorization = format!(
            "OAuth {}",
            oauth_params
                .iter()
                .map(|(k, v)| format!("{k}=\"{}\"", percent_encode(v)))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut auth = SignedAuth::new();
        auth.push_sensitive(header::AUTHORIZATION, HeaderValue::from_str(&authorization)?);

        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisign_core::ErrorKind;
    use http::Method;
    use pretty_assertions::assert_eq;

    fn test_credential(method: SignatureMethod) -> Credential {
        Credential {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            token: "tk".to_string(),
            token_secret: "ts".to_string(),
            signature_method: method,
            realm: None,
            nonce: Some("abc123".to_string()),
            timestamp: Some(1700000000),
        }
    }

    fn test_request() -> SigningRequest {
        SigningRequest::parse(Method::GET, "https://api.example.com/resource?x=1")
            .expect("url must be valid")
    }

    #[test]
    fn test_hmac_sha1() {
        let _ = env_logger::builder().is_test(true).try_init();

        let auth = RequestSigner::new()
            .sign_request(&test_request(), &test_credential(SignatureMethod::HmacSha1))
            .expect("must sign");

        assert_eq!(auth.len(), 1);
        assert_eq!(
            auth.get("authorization").unwrap(),
            "OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"abc123\", \
             oauth_signature=\"FbKwoYEDXoil%2BGBaugcmZGOkOuY%3D\", \
             oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1700000000\", \
             oauth_token=\"tk\", oauth_version=\"1.0\""
        );
        assert!(auth.get("authorization").unwrap().is_sensitive());
    }

    #[test]
    fn test_realm_is_signed() {
        let mut cred = test_credential(SignatureMethod::HmacSha1);
        cred.realm = Some("Photos".to_string());

        let auth = RequestSigner::new()
            .sign_request(&test_request(), &cred)
            .expect("must sign");

        // The realm changes the signature because it participates in the
        // base string, and it appears in the header sorted among the
        // oauth parameters.
        assert_eq!(
            auth.get("authorization").unwrap(),
            "OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"abc123\", \
             oauth_realm=\"Photos\", oauth_signature=\"uC3yUpP%2B8fozEkKZNMFzZi7OILQ%3D\", \
             oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1700000000\", \
             oauth_token=\"tk\", oauth_version=\"1.0\""
        );
    }

    #[test]
    fn test_plaintext() {
        let auth = RequestSigner::new()
            .sign_request(&test_request(), &test_credential(SignatureMethod::Plaintext))
            .expect("must sign");

        let header = auth.get("authorization").unwrap().to_str().unwrap();
        assert!(header.contains("oauth_signature=\"cs%26ts\""));
        assert!(header.contains("oauth_signature_method=\"PLAINTEXT\""));
    }

    #[test]
    fn test_rsa_sha1_is_unsupported() {
        let err = RequestSigner::new()
            .sign_request(&test_request(), &test_credential(SignatureMethod::RsaSha1))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureMethod);
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_deterministic() {
        let signer = RequestSigner::new();
        let cred = test_credential(SignatureMethod::HmacSha1);

        let a = signer.sign_request(&test_request(), &cred).unwrap();
        let b = signer.sign_request(&test_request(), &cred).unwrap();

        assert_eq!(
            a.get("authorization").unwrap(),
            b.get("authorization").unwrap()
        );
    }

    #[test]
    fn test_generated_nonce_and_timestamp() {
        let mut cred = test_credential(SignatureMethod::HmacSha1);
        cred.nonce = None;
        cred.timestamp = None;

        let a = RequestSigner::new()
            .sign_request(&test_request(), &cred)
            .unwrap();
        let b = RequestSigner::new()
            .sign_request(&test_request(), &cred)
            .unwrap();

        // Fresh nonces make the signatures diverge.
        assert_ne!(
            a.get("authorization").unwrap(),
            b.get("authorization").unwrap()
        );
    }
}
