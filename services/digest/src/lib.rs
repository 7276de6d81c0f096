//! HTTP Digest response computation.
//!
//! Computes the MD5-chained `response` for a pre-supplied challenge and
//! emits an `Authorization: Digest ...` header. Challenge acquisition (the
//! prior unauthenticated round-trip that yields realm and nonce) is the
//! caller's job.

mod credential;
pub use credential::Algorithm;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;
