//! AWS Signature Version 4 request signing.
//!
//! Builds the canonical request, derives the four-step HMAC key chain and
//! emits `Authorization`, `X-Amz-Date` and, when a session token is
//! present, `X-Amz-Security-Token`.

mod constants;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;
