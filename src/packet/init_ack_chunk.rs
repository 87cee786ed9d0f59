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
use crate::packet::init_chunk::InitChunk;
use crate::packet::parameter::ParameterList;

pub const CHUNK_TYPE: u8 = 2;

/// Initiation Acknowledgement (INIT ACK) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.3>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 2    |  Chunk Flags  |      Chunk Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Initiate Tag                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |              Advertised Receiver Window Credit                |
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
#[derive(Debug, Default)]
pub struct InitAckChunk {
    pub flags: Option<u8>,
    pub initiate_tag: Option<u32>,
    pub a_rwnd: Option<u32>,
    pub os: Option<u16>,
    pub is: Option<u16>,
    pub initial_tsn: Option<u32>,
    pub parameters: Option<ParameterList>,
}

impl EncodeChunk for InitAckChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        InitChunk {
            flags: self.flags,
            initiate_tag: self.initiate_tag,
            a_rwnd: self.a_rwnd,
            os: self.os,
            is: self.is,
            initial_tsn: self.initial_tsn,
            parameters: self.parameters,
        }
        .encode_as("INIT_ACK", CHUNK_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::EncodeParameter;
    use crate::packet::state_cookie_parameter;
    use crate::packet::state_cookie_parameter::StateCookieParameter;

    #[test]
    fn carries_state_cookie() {
        let mut parameters = ParameterList::new();
        parameters.append(
            StateCookieParameter { length: Some(10), cookie: Some(b"cookie".to_vec()) }
                .encode()
                .unwrap(),
        );
        let chunk = InitAckChunk {
            flags: Some(0),
            initiate_tag: Some(1),
            a_rwnd: Some(2),
            os: Some(3),
            is: Some(4),
            initial_tsn: Some(5),
            parameters: Some(parameters),
        }
        .encode()
        .unwrap();

        assert_eq!(chunk.typ(), CHUNK_TYPE);
        assert_eq!(chunk.length(), 30);
        assert_eq!(
            chunk.bytes(),
            &[
                0x02, 0x00, 0x00, 0x1e, // INIT_ACK, length 30
                0x00, 0x00, 0x00, 0x01, // Initiate tag
                0x00, 0x00, 0x00, 0x02, // a_rwnd
                0x00, 0x03, 0x00, 0x04, // OS, IS
                0x00, 0x00, 0x00, 0x05, // Initial TSN
                0x00, 0x07, 0x00, 0x0a, // State cookie, length 10
                b'c', b'o', b'o', b'k', b'i', b'e', 0x00, 0x00,
            ]
        );
        assert_eq!(chunk.parameters()[0].typ, state_cookie_parameter::PARAMETER_TYPE);
        assert_eq!(chunk.parameters()[0].offset, 20);
        assert!(chunk.unspecified().is_fully_specified());
    }
}
