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
use crate::packet::chunk::UnspecifiedFields;
use crate::packet::or_placeholder;
use crate::packet::write_u32_be;

pub const CHUNK_TYPE: u8 = 7;
const CHUNK_SIZE: usize = 8;

/// Shutdown Association (SHUTDOWN) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.8>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 7    |  Chunk Flags  |          Length = 8           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Cumulative TSN Ack                       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShutdownChunk {
    pub flags: Option<u8>,
    pub cum_tsn: Option<u32>,
}

impl EncodeChunk for ShutdownChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        let mut chunk =
            EncodedChunk::new("SHUTDOWN", CHUNK_TYPE, self.flags, CHUNK_SIZE, CHUNK_SIZE)?;
        let mut cum_tsn_unspecified = false;
        let cum_tsn = or_placeholder(self.cum_tsn, &mut cum_tsn_unspecified);
        write_u32_be!(chunk.value_mut(), cum_tsn);
        chunk.unspecified_mut().fields =
            UnspecifiedFields::Shutdown { cum_tsn: cum_tsn_unspecified };
        Ok(chunk)
    }
}
