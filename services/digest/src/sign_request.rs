use crate::{Algorithm, Credential};
use apisign_core::hash::hex_md5;
use apisign_core::utils::gen_nonce;
use apisign_core::{Error, Result, SignRequest, SignedAuth, SigningRequest};
use http::{header, HeaderValue};
use log::debug;

/// Nonce count sent on every request.
///
/// No session-spanning counter is maintained: every call restarts at 1,
/// so this responder cannot support nonce reuse across requests to the
/// same realm. Multi-request Digest sessions would need a caller-owned
/// counter passed in as an input.
const NONCE_COUNT: &str = "00000001";

/// RequestSigner that implements the client half of HTTP Digest.
///
/// - [RFC 2617: HTTP Authentication](https://datatracker.ietf.org/doc/html/rfc2617)
///
/// Digest is inherently a two-round protocol; this signer only computes
/// round two. It fails with a missing-challenge error when the credential
/// carries no realm or nonce from a prior server challenge.
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new Digest signer.
    pub fn new() -> Self {
        Self {}
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<SignedAuth> {
        let (Some(realm), Some(nonce)) = (&cred.realm, &cred.nonce) else {
            return Err(Error::missing_challenge(
                "digest signing requires realm and nonce from a prior WWW-Authenticate challenge",
            ));
        };

        let cnonce = cred.cnonce.clone().unwrap_or_else(|| gen_nonce(16));
        let uri = req.path_and_query();

        let (ha1, ha2) = match cred.algorithm {
            Algorithm::Md5 => (
                hex_md5(format!("{}:{}:{}", cred.username, realm, cred.password).as_bytes()),
                hex_md5(format!("{}:{}", req.method, uri).as_bytes()),
            ),
        };
        let response = hex_md5(
            format!(
                "{ha1}:{nonce}:{NONCE_COUNT}:{cnonce}:{}:{ha2}",
                cred.qop
            )
            .as_bytes(),
        );
        debug!("calculated digest response for uri {uri}");

        let authorization = format!(
            "Digest username=\"{}\", realm=\"{}\", nonce=\"{}\", uri=\"{}\", \
             qop={}, nc={}, cnonce=\"{}\", response=\"{}\", opaque=\"{}\"",
            cred.username,
            realm,
            nonce,
            uri,
            cred.qop,
            NONCE_COUNT,
            cnonce,
            response,
            cred.opaque.as_deref().unwrap_or_default()
        );

        let mut auth = SignedAuth::new();
        auth.push_sensitive(header::AUTHORIZATION, HeaderValue::from_str(&authorization)?);

        Ok(auth)
    }
}
