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

use crate::math::round_up_to_4;
use crate::packet::ContractViolation;
use crate::packet::MAX_SCTP_CHUNK_BYTES;
use crate::packet::TLV_HEADER_SIZE;
use crate::packet::VariableValue;
use crate::packet::abort_chunk;
use crate::packet::cookie_ack_chunk;
use crate::packet::cookie_echo_chunk;
use crate::packet::cwr_chunk;
use crate::packet::data_chunk;
use crate::packet::ecne_chunk;
use crate::packet::ensure;
use crate::packet::error_chunk;
use crate::packet::heartbeat_ack_chunk;
use crate::packet::heartbeat_request_chunk;
use crate::packet::init_ack_chunk;
use crate::packet::init_chunk;
use crate::packet::list::Encoded;
use crate::packet::list::EncodedList;
use crate::packet::pad_chunk;
use crate::packet::parameter::EmbeddedParameter;
use crate::packet::sack_chunk;
use crate::packet::shutdown_ack_chunk;
use crate::packet::shutdown_chunk;
use crate::packet::shutdown_complete_chunk;
use crate::packet::write_u16_be;
use std::fmt;

pub(crate) const CHUNK_HEADER_SIZE: usize = TLV_HEADER_SIZE;

/// Writes a chunk header with the provided arguments and returns the remaining part of the chunk
/// (its value) that may be filled in by the caller with additional data.
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.2>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Chunk Type   |  Chunk Flags  |         Chunk Length          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                          Chunk Value                          /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[inline]
pub fn write_chunk_header(typ: u8, flags: u8, value_size: usize, output: &mut [u8]) -> &mut [u8] {
    let serialized_size = TLV_HEADER_SIZE + value_size;
    debug_assert!(output.len() >= serialized_size);
    output[0] = typ;
    output[1] = flags;
    write_u16_be!(&mut output[2..4], serialized_size as u16);
    &mut output[TLV_HEADER_SIZE..serialized_size]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataUnspecified {
    pub tsn: bool,
    pub sid: bool,
    pub ssn: bool,
    pub ppid: bool,
}

/// Shared by INIT and INIT-ACK.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitUnspecified {
    pub initiate_tag: bool,
    pub a_rwnd: bool,
    pub os: bool,
    pub is: bool,
    pub initial_tsn: bool,
    /// The list of optional parameters as a whole.
    pub parameters: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SackUnspecified {
    pub cum_tsn: bool,
    pub a_rwnd: bool,
    pub gap_blocks: bool,
    pub dup_tsns: bool,
}

/// The chunk type specific fields that were left as wildcards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnspecifiedFields {
    /// The chunk type has no type specific wildcard fields.
    #[default]
    None,
    Data(DataUnspecified),
    Init(InitUnspecified),
    Sack(SackUnspecified),
    Shutdown { cum_tsn: bool },
    /// ECNE and CWR.
    LowestTsn { lowest_tsn: bool },
}

/// Which fields of a chunk were left as wildcards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkUnspecified {
    pub flags: bool,
    pub length: bool,
    /// The variable-length value (payload, cookie, padding, heartbeat info or error causes).
    pub value: bool,
    pub fields: UnspecifiedFields,
}

impl ChunkUnspecified {
    pub fn is_fully_specified(&self) -> bool {
        let fields = match self.fields {
            UnspecifiedFields::None => false,
            UnspecifiedFields::Data(d) => d.tsn || d.sid || d.ssn || d.ppid,
            UnspecifiedFields::Init(i) => {
                i.initiate_tag || i.a_rwnd || i.os || i.is || i.initial_tsn || i.parameters
            }
            UnspecifiedFields::Sack(s) => s.cum_tsn || s.a_rwnd || s.gap_blocks || s.dup_tsns,
            UnspecifiedFields::Shutdown { cum_tsn } => cum_tsn,
            UnspecifiedFields::LowestTsn { lowest_tsn } => lowest_tsn,
        };
        !self.flags && !self.length && !self.value && !fields
    }
}

/// A serialized chunk, padded with zeroes to a multiple of four bytes, together with the
/// parameters it embeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedChunk {
    typ: u8,
    length: usize,
    bytes: Vec<u8>,
    unspecified: ChunkUnspecified,
    parameters: Vec<EmbeddedParameter>,
}

impl EncodedChunk {
    /// Creates a zeroed chunk of `length` bytes, header included, with the header written. A
    /// wildcard `flags` is written as zero.
    pub(crate) fn new(
        kind: &'static str,
        typ: u8,
        flags: Option<u8>,
        length: usize,
        min_length: usize,
    ) -> Result<Self, ContractViolation> {
        ensure!(
            (min_length..=MAX_SCTP_CHUNK_BYTES).contains(&length),
            ContractViolation::LengthOutOfRange {
                kind,
                length,
                min: min_length,
                max: MAX_SCTP_CHUNK_BYTES
            }
        );
        let mut bytes = vec![0; round_up_to_4!(length)];
        write_chunk_header(typ, flags.unwrap_or(0), length - TLV_HEADER_SIZE, &mut bytes);
        let unspecified = ChunkUnspecified { flags: flags.is_none(), ..Default::default() };
        Ok(Self { typ, length, bytes, unspecified, parameters: Vec::new() })
    }

    pub(crate) fn value_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[TLV_HEADER_SIZE..self.length]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub(crate) fn unspecified_mut(&mut self) -> &mut ChunkUnspecified {
        &mut self.unspecified
    }

    pub(crate) fn set_parameters(&mut self, parameters: Vec<EmbeddedParameter>) {
        self.parameters = parameters;
    }

    /// Replaces the length field with `length`, verbatim, to build chunks with a malformed
    /// length. The length is then no longer derived from the content, so it's marked as
    /// unspecified.
    pub fn override_length(mut self, length: u16) -> Self {
        write_u16_be!(&mut self.bytes[2..4], length);
        self.unspecified.length = true;
        self
    }

    pub fn typ(&self) -> u8 {
        self.typ
    }

    pub fn flags(&self) -> u8 {
        self.bytes[1]
    }

    /// The length of the chunk, without padding.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The serialized chunk, padding included.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn unspecified(&self) -> ChunkUnspecified {
        self.unspecified
    }

    /// Parameters embedded in this chunk, with offsets relative to [`Self::bytes`].
    pub fn parameters(&self) -> &[EmbeddedParameter] {
        &self.parameters
    }

    /// Returns the bytes of the `index`th embedded parameter.
    pub fn parameter_bytes(&self, index: usize) -> Option<&[u8]> {
        self.parameters.get(index).map(|p| p.bytes_in(&self.bytes))
    }

    pub(crate) fn into_parts(
        self,
    ) -> (u8, usize, Vec<u8>, ChunkUnspecified, Vec<EmbeddedParameter>) {
        (self.typ, self.length, self.bytes, self.unspecified, self.parameters)
    }
}

impl Encoded for EncodedChunk {
    fn natural_length(&self) -> usize {
        self.length
    }

    fn encoded_length(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for EncodedChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, flags=0x{:02x}, length={}",
            chunk_type_name(self.typ),
            self.flags(),
            self.length
        )
    }
}

/// Encodes a chunk that consists of nothing but its header.
pub(crate) fn encode_header_only(
    kind: &'static str,
    typ: u8,
    flags: Option<u8>,
) -> Result<EncodedChunk, ContractViolation> {
    EncodedChunk::new(kind, typ, flags, CHUNK_HEADER_SIZE, CHUNK_HEADER_SIZE)
}

/// Encodes a chunk that carries opaque bytes, with a caller chosen total `length`. A missing
/// value is written as `fill`.
pub(crate) fn encode_opaque(
    kind: &'static str,
    typ: u8,
    flags: Option<u8>,
    length: Option<usize>,
    value: Option<&[u8]>,
    fill: u8,
) -> Result<EncodedChunk, ContractViolation> {
    let resolved =
        VariableValue::resolve(kind, CHUNK_HEADER_SIZE, MAX_SCTP_CHUNK_BYTES, length, value)?;
    let mut chunk = EncodedChunk::new(kind, typ, flags, resolved.length, CHUNK_HEADER_SIZE)?;
    let filled = resolved.write_to(fill, chunk.value_mut());
    chunk.unspecified.length = resolved.length_unspecified;
    chunk.unspecified.value = filled;
    Ok(chunk)
}

/// The chunks of a packet, in the order they will be put on the wire.
pub type ChunkList = EncodedList<EncodedChunk>;

pub fn chunk_type_name(typ: u8) -> &'static str {
    match typ {
        data_chunk::CHUNK_TYPE => "DATA",
        init_chunk::CHUNK_TYPE => "INIT",
        init_ack_chunk::CHUNK_TYPE => "INIT_ACK",
        sack_chunk::CHUNK_TYPE => "SACK",
        heartbeat_request_chunk::CHUNK_TYPE => "HEARTBEAT",
        heartbeat_ack_chunk::CHUNK_TYPE => "HEARTBEAT_ACK",
        abort_chunk::CHUNK_TYPE => "ABORT",
        shutdown_chunk::CHUNK_TYPE => "SHUTDOWN",
        shutdown_ack_chunk::CHUNK_TYPE => "SHUTDOWN_ACK",
        error_chunk::CHUNK_TYPE => "ERROR",
        cookie_echo_chunk::CHUNK_TYPE => "COOKIE_ECHO",
        cookie_ack_chunk::CHUNK_TYPE => "COOKIE_ACK",
        ecne_chunk::CHUNK_TYPE => "ECNE",
        cwr_chunk::CHUNK_TYPE => "CWR",
        shutdown_complete_chunk::CHUNK_TYPE => "SHUTDOWN_COMPLETE",
        pad_chunk::CHUNK_TYPE => "PAD",
        _ => "UNKNOWN",
    }
}
