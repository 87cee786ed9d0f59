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
use crate::packet::heartbeat_request_chunk::encode_heartbeat;
use crate::packet::parameter::EncodedParameter;

pub const CHUNK_TYPE: u8 = 5;

/// Heartbeat Acknowledgement (HEARTBEAT ACK) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.6>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 5    |  Chunk Flags  |    Heartbeat Ack Length       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /          Heartbeat Information TLV (Variable-Length)          /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Default)]
pub struct HeartbeatAckChunk {
    pub flags: Option<u8>,
    pub info: Option<EncodedParameter>,
}

impl EncodeChunk for HeartbeatAckChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        encode_heartbeat("HEARTBEAT_ACK", CHUNK_TYPE, self.flags, self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::EncodeParameter;
    use crate::packet::heartbeat_info_parameter::HeartbeatInfoParameter;

    #[test]
    fn echoes_info() {
        let info = HeartbeatInfoParameter { length: Some(8), info: Some(vec![9, 8, 7, 6]) }
            .encode()
            .unwrap();
        let chunk = HeartbeatAckChunk { flags: Some(0), info: Some(info) }.encode().unwrap();
        assert_eq!(chunk.bytes(), &[0x05, 0x00, 0x00, 0x0c, 0x00, 0x01, 0x00, 0x08, 9, 8, 7, 6]);
        assert!(chunk.unspecified().is_fully_specified());
    }
}
