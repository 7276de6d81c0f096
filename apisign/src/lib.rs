#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use apisign_core::*;

#[cfg(feature = "aws")]
pub mod aws {
    //! AWS Signature Version 4.
    pub use apisign_aws_v4::*;
}

#[cfg(feature = "digest")]
pub mod digest {
    //! HTTP Digest (RFC 2617), response computation only.
    pub use apisign_digest::*;
}

#[cfg(feature = "hawk")]
pub mod hawk {
    //! Hawk header authentication.
    pub use apisign_hawk::*;
}

#[cfg(feature = "oauth1")]
pub mod oauth1 {
    //! OAuth 1.0a.
    pub use apisign_oauth1::*;
}
