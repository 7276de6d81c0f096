//! Hawk request signing.
//!
//! Builds the `hawk.1.header` normalized string, MACs it with HMAC-SHA256
//! and emits an `Authorization: Hawk ...` header.

mod credential;
pub use credential::Algorithm;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;
