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
use crate::packet::chunk::encode_header_only;

pub const CHUNK_TYPE: u8 = 6;

/// The T bit: the sender filled in the peer's verification tag instead of its own.
pub const FLAG_TAG_REFLECTED: u8 = 0x01;

/// Abort Association (ABORT) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.7>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 6    |  Reserved   |T|            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                   zero or more Error Causes                   /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// Encoded without error causes.
#[derive(Clone, Debug, Default)]
pub struct AbortChunk {
    pub flags: Option<u8>,
}

impl EncodeChunk for AbortChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        encode_header_only("ABORT", CHUNK_TYPE, self.flags)
    }
}
