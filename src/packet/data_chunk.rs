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
use crate::packet::chunk::DataUnspecified;
use crate::packet::chunk::EncodedChunk;
use crate::packet::chunk::UnspecifiedFields;
use crate::packet::or_placeholder;
use crate::packet::write_u16_be;
use crate::packet::write_u32_be;

pub const CHUNK_TYPE: u8 = 0;
pub(crate) const HEADER_SIZE: usize = 16;

pub const FLAG_END: u8 = 0x01;
pub const FLAG_BEGINNING: u8 = 0x02;
pub const FLAG_UNORDERED: u8 = 0x04;
pub const FLAG_IMMEDIATE_ACK: u8 = 0x08;

/// Payload Data (DATA) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 0    |  Res  |I|U|B|E|            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                              TSN                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |      Stream Identifier S      |   Stream Sequence Number n    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  Payload Protocol Identifier                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                 User Data (seq n of Stream S)                 /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// `length` is the total chunk length. The user data is zero filled; without a length the chunk
/// carries no user data at all.
#[derive(Clone, Debug, Default)]
pub struct DataChunk {
    pub flags: Option<u8>,
    pub length: Option<usize>,
    pub tsn: Option<u32>,
    pub sid: Option<u16>,
    pub ssn: Option<u16>,
    pub ppid: Option<u32>,
}

impl EncodeChunk for DataChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        let length = self.length.unwrap_or(HEADER_SIZE);
        let mut chunk = EncodedChunk::new("DATA", CHUNK_TYPE, self.flags, length, HEADER_SIZE)?;

        let mut unspecified = DataUnspecified::default();
        let tsn = or_placeholder(self.tsn, &mut unspecified.tsn);
        let sid = or_placeholder(self.sid, &mut unspecified.sid);
        let ssn = or_placeholder(self.ssn, &mut unspecified.ssn);
        let ppid = or_placeholder(self.ppid, &mut unspecified.ppid);

        let value = chunk.value_mut();
        write_u32_be!(&mut value[0..4], tsn);
        write_u16_be!(&mut value[4..6], sid);
        write_u16_be!(&mut value[6..8], ssn);
        write_u32_be!(&mut value[8..12], ppid);

        let record = chunk.unspecified_mut();
        record.length = self.length.is_none();
        record.value = self.length.is_none();
        record.fields = UnspecifiedFields::Data(unspecified);
        Ok(chunk)
    }
}
