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
use crate::packet::chunk::CHUNK_HEADER_SIZE;
use crate::packet::chunk::EncodedChunk;
use crate::packet::list::Encoded;
use crate::packet::parameter::EmbeddedParameter;
use crate::packet::parameter::EncodedParameter;

pub const CHUNK_TYPE: u8 = 4;

/// Heartbeat Request (HEARTBEAT) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.5>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 4    |  Chunk Flags  |      Heartbeat Length         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /          Heartbeat Information TLV (Variable-Length)          /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// Without an info parameter the chunk is header only, with its length and value unspecified.
#[derive(Debug, Default)]
pub struct HeartbeatRequestChunk {
    pub flags: Option<u8>,
    pub info: Option<EncodedParameter>,
}

/// Encodes a HEARTBEAT or HEARTBEAT-ACK, which only differ in their type.
pub(crate) fn encode_heartbeat(
    kind: &'static str,
    typ: u8,
    flags: Option<u8>,
    info: Option<EncodedParameter>,
) -> Result<EncodedChunk, ContractViolation> {
    let Some(info) = info else {
        let mut chunk = EncodedChunk::new(kind, typ, flags, CHUNK_HEADER_SIZE, CHUNK_HEADER_SIZE)?;
        let record = chunk.unspecified_mut();
        record.length = true;
        record.value = true;
        return Ok(chunk);
    };

    let length = CHUNK_HEADER_SIZE + info.length();
    let mut chunk = EncodedChunk::new(kind, typ, flags, length, CHUNK_HEADER_SIZE)?;
    let end = CHUNK_HEADER_SIZE + info.encoded_length();
    chunk.bytes_mut()[CHUNK_HEADER_SIZE..end].copy_from_slice(info.bytes());

    let record = chunk.unspecified_mut();
    record.length = info.unspecified().length;
    record.value = info.unspecified().value;
    chunk.set_parameters(vec![EmbeddedParameter {
        typ: info.typ(),
        offset: CHUNK_HEADER_SIZE,
        length: info.length(),
        unspecified: info.unspecified(),
    }]);
    Ok(chunk)
}

impl EncodeChunk for HeartbeatRequestChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        encode_heartbeat("HEARTBEAT", CHUNK_TYPE, self.flags, self.info)
    }
}
