//! Core components for signing API requests.
//!
//! This crate provides the shared types used by every signing scheme in the
//! apisign workspace: the request envelope, the signed output, the signer
//! trait, and the encoding/hashing primitives the schemes are built from.
//!
//! ## Overview
//!
//! - [`SigningRequest`]: the resolved request envelope (method, URL parts,
//!   headers, body) that a scheme signs. Template variables must already be
//!   substituted by the caller; this crate never interprets `{{...}}`.
//! - [`SignedAuth`]: the headers a signer produces, to be merged into the
//!   outgoing request before it reaches the transport layer.
//! - [`SignRequest`]: the trait every scheme signer implements.
//!
//! All signers are pure, synchronous functions over their inputs plus a
//! clock and a randomness source, both of which can be pinned by the caller
//! for deterministic output.
//!
//! ## Example
//!
//! ```no_run
//! use apisign_core::{Result, SignRequest, SignedAuth, SigningCredential, SigningRequest};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _req: &SigningRequest,
//!         _credential: &Self::Credential,
//!     ) -> Result<SignedAuth> {
//!         // Compute your Authorization header here.
//!         todo!()
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let req = SigningRequest::parse(http::Method::GET, "https://example.com/resource")?;
//! let cred = MyCredential {
//!     key: "my-access-key".to_string(),
//!     secret: "my-secret-key".to_string(),
//! };
//!
//! let auth = MySigner.sign_request(&req, &cred)?;
//! for (name, value) in auth.iter() {
//!     println!("{name}: {value:?}");
//! }
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod encode;
pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::{SignedAuth, SigningRequest};
