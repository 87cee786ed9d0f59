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

use crate::packet::chunk::EncodedChunk;
use crate::packet::parameter::EncodedParameter;
use thiserror::Error;

pub mod abort_chunk;
pub mod chunk;
pub mod cookie_ack_chunk;
pub mod cookie_echo_chunk;
pub mod cookie_preservative_parameter;
pub mod cwr_chunk;
pub mod data_chunk;
pub mod ecn_capable_parameter;
pub mod ecne_chunk;
pub mod error_chunk;
pub mod heartbeat_ack_chunk;
pub mod heartbeat_info_parameter;
pub mod heartbeat_request_chunk;
pub mod hostname_address_parameter;
pub mod init_ack_chunk;
pub mod init_chunk;
pub mod ipv4_address_parameter;
pub mod ipv6_address_parameter;
pub mod list;
pub mod pad_chunk;
pub mod pad_parameter;
pub mod parameter;
pub mod sack_chunk;
pub mod sctp_packet;
pub mod shutdown_ack_chunk;
pub mod shutdown_chunk;
pub mod shutdown_complete_chunk;
pub mod state_cookie_parameter;
pub mod supported_address_types_parameter;
pub mod unknown_chunk;
pub mod unrecognized_parameters_parameter;

/// Size of the Type-Length-Value header, used by chunks and parameters.
pub(crate) const TLV_HEADER_SIZE: usize = 4;

/// Largest chunk that fits in the 16-bit length field.
pub const MAX_SCTP_CHUNK_BYTES: usize = 0xffff;

/// Largest parameter that fits in the 16-bit length field.
pub const MAX_SCTP_PARAMETER_BYTES: usize = 0xffff;

macro_rules! read_u16_be {
    ($buf: expr) => {
        u16::from_be_bytes([$buf[0], $buf[1]])
    };
}

macro_rules! read_u32_be {
    ($buf: expr) => {
        u32::from_be_bytes([$buf[0], $buf[1], $buf[2], $buf[3]])
    };
}

macro_rules! write_u16_be {
    ($buf: expr, $n: expr) => {
        $buf[..2].copy_from_slice(&($n as u16).to_be_bytes());
    };
}

macro_rules! write_u32_be {
    ($buf: expr, $n: expr) => {
        $buf[..4].copy_from_slice(&($n as u32).to_be_bytes());
    };
}

macro_rules! ensure {
    ($cond: expr, $err: expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

pub(crate) use ensure;
pub(crate) use read_u16_be;
pub(crate) use read_u32_be;
pub(crate) use write_u16_be;
pub(crate) use write_u32_be;

/// Misuse of the encoder API, e.g. asking for a chunk that can't be represented on the wire.
///
/// These are never the result of anything but a malformed packet description. Callers are
/// expected to abort the test step that produced it, but get to report which encoder failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContractViolation {
    #[error("{kind}: length {length} is outside of the valid range {min}..={max}")]
    LengthOutOfRange { kind: &'static str, length: usize, min: usize, max: usize },

    #[error("{kind}: a value was given without a length")]
    ValueWithoutLength { kind: &'static str },

    #[error("{kind}: value has {actual} bytes, but the length requires {expected}")]
    ValueSizeMismatch { kind: &'static str, expected: usize, actual: usize },

    #[error("{kind}: {size} bytes exceeds the maximum of {max} bytes")]
    TooLarge { kind: &'static str, size: usize, max: usize },

    #[error("list tracks {tracked} encoded bytes, but its members add up to {counted}")]
    LengthAccounting { tracked: usize, counted: usize },
}

/// Encoders for the optional/variable-length parameters that are nested in chunks.
pub trait EncodeParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation>;
}

/// Encoders for chunks.
pub trait EncodeChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation>;
}

/// Returns the provided value, or the default placeholder when it's a wildcard, in which case
/// `unspecified` is set.
pub(crate) fn or_placeholder<T: Default>(value: Option<T>, unspecified: &mut bool) -> T {
    *unspecified = value.is_none();
    value.unwrap_or_default()
}

/// A variable-length payload of a chunk or parameter, resolved from a caller-provided total
/// length and optional value.
#[derive(Debug, PartialEq)]
pub(crate) struct VariableValue<'a> {
    /// The natural length of the TLV, header included.
    pub(crate) length: usize,
    pub(crate) length_unspecified: bool,
    /// The bytes to copy, or `None` to write the synthetic fill.
    pub(crate) value: Option<&'a [u8]>,
}

impl<'a> VariableValue<'a> {
    /// `length` is the total TLV length including its `header_size` bytes header. Without a
    /// length, the TLV gets an empty value.
    pub(crate) fn resolve(
        kind: &'static str,
        header_size: usize,
        max_size: usize,
        length: Option<usize>,
        value: Option<&'a [u8]>,
    ) -> Result<Self, ContractViolation> {
        let Some(length) = length else {
            ensure!(value.is_none(), ContractViolation::ValueWithoutLength { kind });
            return Ok(Self { length: header_size, length_unspecified: true, value: None });
        };
        ensure!(
            length >= header_size && length <= max_size,
            ContractViolation::LengthOutOfRange { kind, length, min: header_size, max: max_size }
        );
        if let Some(value) = value {
            ensure!(
                value.len() == length - header_size,
                ContractViolation::ValueSizeMismatch {
                    kind,
                    expected: length - header_size,
                    actual: value.len()
                }
            );
        }
        Ok(Self { length, length_unspecified: false, value })
    }

    /// Writes the value, or `fill` when no value was provided. Returns true when the fill was
    /// used.
    pub(crate) fn write_to(&self, fill: u8, output: &mut [u8]) -> bool {
        match self.value {
            Some(value) => {
                output.copy_from_slice(value);
                false
            }
            None => {
                output.fill(fill);
                true
            }
        }
    }
}
