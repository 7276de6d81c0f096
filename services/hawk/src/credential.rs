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

/// MAC algorithm for Hawk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algorithm {
    /// HMAC-SHA256, the only algorithm currently specified.
    #[default]
    Sha256,
}

/// Credential that holds the Hawk id and key.
///
/// `nonce` and `timestamp` are generated at signing time when not supplied;
/// supply both to get deterministic output.
#[derive(Default, Clone)]
pub struct Credential {
    /// Hawk auth id, sent in clear in the header.
    pub id: String,
    /// Hawk auth key, the MAC key. Never sent.
    pub key: String,
    /// MAC algorithm.
    pub algorithm: Algorithm,
    /// Optional application id, folded into the MAC.
    pub app: Option<String>,
    /// Optional ext data, appended to the header but not folded into the
    /// MAC.
    pub ext: Option<String>,
    /// Caller supplied nonce. Generated when absent.
    pub nonce: Option<String>,
    /// Caller supplied Unix timestamp in seconds. Taken from the clock
    /// when absent.
    pub timestamp: Option<i64>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("key", &Redact::from(&self.key))
            .field("algorithm", &self.algorithm)
            .field("app", &self.app)
            .field("ext", &self.ext)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.key.is_empty()
    }
}
