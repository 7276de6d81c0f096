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

/// Digest hashing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algorithm {
    /// MD5, the only algorithm currently specified.
    #[default]
    Md5,
}

/// Credential that holds the user material plus the server challenge.
///
/// `realm`, `nonce` and `opaque` come from a prior `WWW-Authenticate`
/// challenge; signing without realm and nonce fails, it is a precondition,
/// not a bug. `cnonce` is generated when absent.
#[derive(Clone)]
pub struct Credential {
    /// Username for the protection space.
    pub username: String,
    /// Password, only ever hashed.
    pub password: String,
    /// Hashing algorithm.
    pub algorithm: Algorithm,
    /// Quality of protection, constrains which fields feed the response
    /// hash.
    pub qop: String,
    /// Realm from the server challenge.
    pub realm: Option<String>,
    /// Nonce from the server challenge.
    pub nonce: Option<String>,
    /// Opaque from the server challenge, echoed back verbatim.
    pub opaque: Option<String>,
    /// Caller supplied client nonce. Generated when absent.
    pub cnonce: Option<String>,
}

impl Default for Credential {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            algorithm: Algorithm::default(),
            qop: "auth".to_string(),
            realm: None,
            nonce: None,
            opaque: None,
            cnonce: None,
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &Redact::from(&self.password))
            .field("algorithm", &self.algorithm)
            .field("qop", &self.qop)
            .field("realm", &self.realm)
            .field("nonce", &self.nonce)
            .field("opaque", &self.opaque)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.username.is_empty() && self.realm.is_some() && self.nonce.is_some()
    }
}
