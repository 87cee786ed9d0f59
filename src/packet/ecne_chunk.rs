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

pub const CHUNK_TYPE: u8 = 12;
const CHUNK_SIZE: usize = 8;

/// Explicit Congestion Notification Echo (ECNE) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#appendix-A>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 12   |  Chunk Flags  |          Length = 8           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Lowest TSN                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct EcneChunk {
    pub flags: Option<u8>,
    pub lowest_tsn: Option<u32>,
}

/// Encodes an ECNE or CWR, which only differ in their type.
pub(crate) fn encode_lowest_tsn(
    kind: &'static str,
    typ: u8,
    flags: Option<u8>,
    lowest_tsn: Option<u32>,
) -> Result<EncodedChunk, ContractViolation> {
    let mut chunk = EncodedChunk::new(kind, typ, flags, CHUNK_SIZE, CHUNK_SIZE)?;
    let mut lowest_tsn_unspecified = false;
    let lowest_tsn = or_placeholder(lowest_tsn, &mut lowest_tsn_unspecified);
    write_u32_be!(chunk.value_mut(), lowest_tsn);
    chunk.unspecified_mut().fields =
        UnspecifiedFields::LowestTsn { lowest_tsn: lowest_tsn_unspecified };
    Ok(chunk)
}

impl EncodeChunk for EcneChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        encode_lowest_tsn("ECNE", CHUNK_TYPE, self.flags, self.lowest_tsn)
    }
}
