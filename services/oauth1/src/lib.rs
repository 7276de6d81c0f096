//! OAuth 1.0a request signing.
//!
//! Builds the signature base string over the merged query and `oauth_*`
//! parameter set and emits an `Authorization: OAuth ...` header.

mod credential;
pub use credential::Credential;
pub use credential::SignatureMethod;

mod sign_request;
pub use sign_request::RequestSigner;
