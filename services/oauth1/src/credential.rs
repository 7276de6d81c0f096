// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use apisign_core::utils::Redact;
use apisign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// The signature method named by `oauth_signature_method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    /// HMAC-SHA1 over the signature base string, base64 encoded.
    #[default]
    HmacSha1,
    /// The signing key sent verbatim, no hashing.
    Plaintext,
    /// RSA-SHA1 is a distinct variant so a future implementation can fill
    /// it in, but signing with it currently fails: no private key material
    /// is modeled.
    RsaSha1,
}

impl SignatureMethod {
    /// The wire name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::Plaintext => "PLAINTEXT",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
        }
    }
}

/// Credential that holds the OAuth 1.0a consumer and token material.
///
/// `nonce` and `timestamp` are generated at signing time when not supplied;
/// supply both to get deterministic output.
#[derive(Default, Clone)]
pub struct Credential {
    /// Consumer key identifying the client application.
    pub consumer_key: String,
    /// Consumer secret, the client half of the signing key.
    pub consumer_secret: String,
    /// Access token identifying the resource owner.
    pub token: String,
    /// Token secret, the token half of the signing key.
    pub token_secret: String,
    /// Signature method to use.
    pub signature_method: SignatureMethod,
    /// Optional realm, signed like any other oauth parameter.
    pub realm: Option<String>,
    /// Caller supplied nonce. Generated when absent.
    pub nonce: Option<String>,
    /// Caller supplied Unix timestamp in seconds. Taken from the clock
    /// when absent.
    pub timestamp: Option<i64>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("signature_method", &self.signature_method)
            .field("realm", &self.realm)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}
