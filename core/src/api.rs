use crate::{Result, SignedAuth, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait implemented by every scheme's credential
/// record.
///
/// Schemes require different material to sign a request: OAuth1 needs a
/// consumer key/secret pair, AWS needs an access key and secret key, Digest
/// needs a username/password plus server challenge. Credentials are
/// constructed per request by the caller and are immutable for the duration
/// of one signing call.
pub trait SigningCredential: Clone + Debug + Send + Sync + 'static {
    /// Check if the credential carries enough material to sign with.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// SignRequest is the trait implemented by every scheme signer.
///
/// Signers are pure: they hold no shared mutable state and are safe to call
/// concurrently from any number of threads. The only effectful inputs are
/// the clock and the nonce source, both of which the caller can pin for
/// deterministic output.
pub trait SignRequest: Debug + Send + Sync {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Compute the authentication headers for the given request.
    ///
    /// Returns the headers to merge into the outgoing request: a single
    /// `Authorization` entry for most schemes, two or three entries for
    /// AWS. On failure no partial output is ever returned.
    fn sign_request(
        &self,
        req: &SigningRequest,
        credential: &Self::Credential,
    ) -> Result<SignedAuth>;
}
