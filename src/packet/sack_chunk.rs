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
use crate::packet::chunk::SackUnspecified;
use crate::packet::chunk::UnspecifiedFields;
use crate::packet::list::List;
use crate::packet::or_placeholder;
use crate::packet::write_u16_be;
use crate::packet::write_u32_be;
use std::fmt;

pub const CHUNK_TYPE: u8 = 3;
pub(crate) const HEADER_SIZE: usize = 16;

/// Selective Acknowledgement (SACK) chunk
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.4>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 3    |  Chunk Flags  |         Chunk Length          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Cumulative TSN Ack                       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Advertised Receiver Window Credit (a_rwnd)           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// | Number of Gap Ack Blocks = N  |  Number of Duplicate TSNs = M |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    Gap Ack Block #1 Start     |     Gap Ack Block #1 End      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                                                               /
/// \                              ...                              \
/// /                                                               /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    Gap Ack Block #N Start     |     Gap Ack Block #N End      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Duplicate TSN 1                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                                                               /
/// \                              ...                              \
/// /                                                               /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Duplicate TSN M                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GapAckBlock {
    pub start: u16,
    pub end: u16,
}

impl GapAckBlock {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }
}

/// A wildcard gap block or duplicate TSN list is sent as empty, and leaves the chunk length
/// unspecified.
#[derive(Debug, Default)]
pub struct SackChunk {
    pub flags: Option<u8>,
    pub cum_tsn: Option<u32>,
    pub a_rwnd: Option<u32>,
    pub gap_blocks: Option<List<GapAckBlock>>,
    pub dup_tsns: Option<List<u32>>,
}

impl EncodeChunk for SackChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        let mut unspecified = SackUnspecified::default();
        let cum_tsn = or_placeholder(self.cum_tsn, &mut unspecified.cum_tsn);
        let a_rwnd = or_placeholder(self.a_rwnd, &mut unspecified.a_rwnd);
        let gap_blocks = or_placeholder(self.gap_blocks, &mut unspecified.gap_blocks);
        let dup_tsns = or_placeholder(self.dup_tsns, &mut unspecified.dup_tsns);

        let length = HEADER_SIZE + gap_blocks.len() * 4 + dup_tsns.len() * 4;
        let mut chunk = EncodedChunk::new("SACK", CHUNK_TYPE, self.flags, length, HEADER_SIZE)?;

        let value = chunk.value_mut();
        write_u32_be!(&mut value[0..4], cum_tsn);
        write_u32_be!(&mut value[4..8], a_rwnd);
        write_u16_be!(&mut value[8..10], gap_blocks.len() as u16);
        write_u16_be!(&mut value[10..12], dup_tsns.len() as u16);

        let gap_blocks_end = 12 + gap_blocks.len() * 4;
        for (block, out) in gap_blocks.iter().zip(value[12..gap_blocks_end].chunks_exact_mut(4)) {
            write_u16_be!(&mut out[0..2], block.start);
            write_u16_be!(&mut out[2..4], block.end);
        }
        for (tsn, out) in dup_tsns.iter().zip(value[gap_blocks_end..].chunks_exact_mut(4)) {
            write_u32_be!(out, *tsn);
        }

        let record = chunk.unspecified_mut();
        record.length = unspecified.gap_blocks || unspecified.dup_tsns;
        record.fields = UnspecifiedFields::Sack(unspecified);
        Ok(chunk)
    }
}

impl fmt::Display for SackChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SACK, cum_ack_tsn={:?}, a_rwnd={:?}", self.cum_tsn, self.a_rwnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_gap_block() {
        let chunk = SackChunk {
            flags: Some(0),
            cum_tsn: Some(100),
            a_rwnd: Some(5000),
            gap_blocks: Some([GapAckBlock::new(5, 5)].into_iter().collect()),
            dup_tsns: Some(List::new()),
        }
        .encode()
        .unwrap();

        assert_eq!(chunk.length(), 20);
        assert_eq!(
            chunk.bytes(),
            &[
                0x03, 0x00, 0x00, 0x14, // SACK, length 20
                0x00, 0x00, 0x00, 0x64, // Cumulative TSN ack
                0x00, 0x00, 0x13, 0x88, // a_rwnd
                0x00, 0x01, 0x00, 0x00, // One gap ack block, no duplicates
                0x00, 0x05, 0x00, 0x05, // Gap ack block
            ]
        );
        assert!(chunk.unspecified().is_fully_specified());
    }

    #[test]
    fn gap_blocks_and_duplicates() {
        let chunk = SackChunk {
            flags: Some(0),
            cum_tsn: Some(916312075),
            a_rwnd: Some(126323),
            gap_blocks: Some(
                [GapAckBlock::new(2, 6), GapAckBlock::new(8, 8)].into_iter().collect(),
            ),
            dup_tsns: Some([916312081].into_iter().collect()),
        }
        .encode()
        .unwrap();

        assert_eq!(
            chunk.bytes(),
            &[
                0x03, 0x00, 0x00, 0x1c, 0x36, 0x9d, 0xd0, 0x0b, 0x00, 0x01, 0xed, 0x73, 0x00, 0x02,
                0x00, 0x01, 0x00, 0x02, 0x00, 0x06, 0x00, 0x08, 0x00, 0x08, 0x36, 0x9d, 0xd0, 0x11,
            ]
        );
    }

    #[test]
    fn wildcard_gap_blocks() {
        let chunk = SackChunk {
            flags: Some(0),
            cum_tsn: Some(100),
            a_rwnd: Some(5000),
            gap_blocks: None,
            dup_tsns: Some(List::new()),
        }
        .encode()
        .unwrap();

        assert_eq!(chunk.length(), 16);
        assert_eq!(&chunk.bytes()[12..16], &[0x00, 0x00, 0x00, 0x00]);
        assert!(chunk.unspecified().length);
        assert_eq!(
            chunk.unspecified().fields,
            UnspecifiedFields::Sack(SackUnspecified { gap_blocks: true, ..Default::default() })
        );
    }

    #[test]
    fn wildcard_scalars() {
        let chunk = SackChunk {
            gap_blocks: Some(List::new()),
            dup_tsns: Some(List::new()),
            ..Default::default()
        }
        .encode()
        .unwrap();
        assert!(!chunk.unspecified().length);
        assert!(chunk.unspecified().flags);
        assert_eq!(
            chunk.unspecified().fields,
            UnspecifiedFields::Sack(SackUnspecified {
                cum_tsn: true,
                a_rwnd: true,
                gap_blocks: false,
                dup_tsns: false
            })
        );
    }

    #[test]
    fn too_many_duplicates() {
        let dup_tsns = (0..16380).collect();
        assert!(matches!(
            SackChunk { dup_tsns: Some(dup_tsns), ..Default::default() }.encode(),
            Err(ContractViolation::LengthOutOfRange { kind: "SACK", .. })
        ));
    }
}
