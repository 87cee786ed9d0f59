// Copyright 2025 The dcSCTP Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::packet::ContractViolation;
use crate::packet::EncodeChunk;
use crate::packet::chunk::EncodedChunk;
use crate::packet::chunk::encode_opaque;

pub const CHUNK_TYPE: u8 = 10;

/// State Cookie (COOKIE ECHO) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.11>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 10   |  Chunk Flags  |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                            Cookie                             /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// `length` is the total chunk length. Without a cookie, it's filled with `'A'`.
#[derive(Clone, Debug, Default)]
pub struct CookieEchoChunk {
    pub flags: Option<u8>,
    pub length: Option<usize>,
    pub cookie: Option<Vec<u8>>,
}

impl EncodeChunk for CookieEchoChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        encode_opaque(
            "COOKIE_ECHO",
            CHUNK_TYPE,
            self.flags,
            self.length,
            self.cookie.as_deref(),
            b'A',
        )
    }
}
