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
use crate::packet::ecne_chunk::encode_lowest_tsn;

pub const CHUNK_TYPE: u8 = 13;

/// Congestion Window Reduced (CWR) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#appendix-A>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 13   |  Chunk Flags  |          Length = 8           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Lowest TSN                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct CwrChunk {
    pub flags: Option<u8>,
    pub lowest_tsn: Option<u32>,
}

impl EncodeChunk for CwrChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        encode_lowest_tsn("CWR", CHUNK_TYPE, self.flags, self.lowest_tsn)
    }
}
