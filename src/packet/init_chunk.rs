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
use crate::packet::chunk::InitUnspecified;
use crate::packet::chunk::UnspecifiedFields;
use crate::packet::or_placeholder;
use crate::packet::parameter::ParameterList;
use crate::packet::parameter::embed_parameters;
use crate::packet::write_u16_be;
use crate::packet::write_u32_be;

pub const CHUNK_TYPE: u8 = 1;
pub(crate) const HEADER_SIZE: usize = 20;

/// Initiation (INIT) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.2>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 1    |  Chunk Flags  |      Chunk Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Initiate Tag                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           Advertised Receiver Window Credit (a_rwnd)          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Number of Outbound Streams   |  Number of Inbound Streams    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Initial TSN                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /              Optional/Variable-Length Parameters              /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// A wildcard parameter list encodes a chunk without parameters, with an unspecified length.
#[derive(Debug, Default)]
pub struct InitChunk {
    pub flags: Option<u8>,
    pub initiate_tag: Option<u32>,
    pub a_rwnd: Option<u32>,
    pub os: Option<u16>,
    pub is: Option<u16>,
    pub initial_tsn: Option<u32>,
    pub parameters: Option<ParameterList>,
}

impl InitChunk {
    /// Encodes with the given chunk type, as INIT and INIT-ACK share their layout.
    pub(crate) fn encode_as(
        self,
        kind: &'static str,
        typ: u8,
    ) -> Result<EncodedChunk, ContractViolation> {
        let mut unspecified = InitUnspecified::default();
        let initiate_tag = or_placeholder(self.initiate_tag, &mut unspecified.initiate_tag);
        let a_rwnd = or_placeholder(self.a_rwnd, &mut unspecified.a_rwnd);
        let os = or_placeholder(self.os, &mut unspecified.os);
        let is = or_placeholder(self.is, &mut unspecified.is);
        let initial_tsn = or_placeholder(self.initial_tsn, &mut unspecified.initial_tsn);
        let parameters = or_placeholder(self.parameters, &mut unspecified.parameters);
        parameters.verify()?;

        let length = HEADER_SIZE + parameters.declared_length();
        let mut chunk = EncodedChunk::new(kind, typ, self.flags, length, HEADER_SIZE)?;

        let value = chunk.value_mut();
        write_u32_be!(&mut value[0..4], initiate_tag);
        write_u32_be!(&mut value[4..8], a_rwnd);
        write_u16_be!(&mut value[8..10], os);
        write_u16_be!(&mut value[10..12], is);
        write_u32_be!(&mut value[12..16], initial_tsn);

        let parameters_end = HEADER_SIZE + parameters.encoded_length();
        let embedded = embed_parameters(
            parameters,
            HEADER_SIZE,
            &mut chunk.bytes_mut()[HEADER_SIZE..parameters_end],
        );
        let record = chunk.unspecified_mut();
        record.length = unspecified.parameters || embedded.iter().any(|p| p.unspecified.length);
        record.fields = UnspecifiedFields::Init(unspecified);
        chunk.set_parameters(embedded);
        Ok(chunk)
    }
}

impl EncodeChunk for InitChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        self.encode_as("INIT", CHUNK_TYPE)
    }
}
