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
use crate::packet::MAX_SCTP_PARAMETER_BYTES;
use crate::packet::VariableValue;
use crate::packet::ensure;
use crate::packet::list::Encoded;
use crate::packet::list::EncodedList;
use crate::packet::write_u16_be;
use std::fmt;

pub(crate) const PARAMETER_HEADER_SIZE: usize = 4;

/// Writes a parameter header with the provided arguments and returns the remaining part of the
/// parameter (its value) that may be filled in by the caller with additional data.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |        Parameter Type         |       Parameter Length        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                        Parameter Value                        /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[inline]
pub fn write_parameter_header(typ: u16, value_size: usize, output: &mut [u8]) -> &mut [u8] {
    let serialized_size = PARAMETER_HEADER_SIZE + value_size;
    debug_assert!(output.len() >= serialized_size);
    write_u16_be!(&mut output[0..2], typ);
    write_u16_be!(&mut output[2..4], serialized_size as u16);
    &mut output[PARAMETER_HEADER_SIZE..serialized_size]
}

/// Which fields of a parameter were left as wildcards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParameterUnspecified {
    pub length: bool,
    pub value: bool,
}

impl ParameterUnspecified {
    pub fn is_fully_specified(&self) -> bool {
        !self.length && !self.value
    }
}

impl std::ops::BitOrAssign for ParameterUnspecified {
    fn bitor_assign(&mut self, rhs: Self) {
        self.length |= rhs.length;
        self.value |= rhs.value;
    }
}

/// A serialized parameter, padded with zeroes to a multiple of four bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedParameter {
    typ: u16,
    length: usize,
    bytes: Vec<u8>,
    unspecified: ParameterUnspecified,
}

impl EncodedParameter {
    /// Creates a zeroed parameter of `length` bytes, header included, with the header written.
    pub(crate) fn new(
        kind: &'static str,
        typ: u16,
        length: usize,
    ) -> Result<Self, ContractViolation> {
        ensure!(
            (PARAMETER_HEADER_SIZE..=MAX_SCTP_PARAMETER_BYTES).contains(&length),
            ContractViolation::LengthOutOfRange {
                kind,
                length,
                min: PARAMETER_HEADER_SIZE,
                max: MAX_SCTP_PARAMETER_BYTES
            }
        );
        let mut bytes = vec![0; round_up_to_4!(length)];
        write_parameter_header(typ, length - PARAMETER_HEADER_SIZE, &mut bytes);
        Ok(Self { typ, length, bytes, unspecified: ParameterUnspecified::default() })
    }

    pub(crate) fn value_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[PARAMETER_HEADER_SIZE..self.length]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub(crate) fn unspecified_mut(&mut self) -> &mut ParameterUnspecified {
        &mut self.unspecified
    }

    pub fn typ(&self) -> u16 {
        self.typ
    }

    /// The length of the parameter, without padding.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The serialized parameter, padding included.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn value(&self) -> &[u8] {
        &self.bytes[PARAMETER_HEADER_SIZE..self.length]
    }

    pub fn unspecified(&self) -> ParameterUnspecified {
        self.unspecified
    }
}

impl Encoded for EncodedParameter {
    fn natural_length(&self) -> usize {
        self.length
    }

    fn encoded_length(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for EncodedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, length={}", parameter_type_name(self.typ), self.length)
    }
}

/// Encodes a parameter that carries opaque bytes, with a caller chosen total `length`. A missing
/// value is written as `fill`.
pub(crate) fn encode_opaque(
    kind: &'static str,
    typ: u16,
    length: Option<usize>,
    value: Option<&[u8]>,
    fill: u8,
) -> Result<EncodedParameter, ContractViolation> {
    let resolved = VariableValue::resolve(
        kind,
        PARAMETER_HEADER_SIZE,
        MAX_SCTP_PARAMETER_BYTES,
        length,
        value,
    )?;
    let mut parameter = EncodedParameter::new(kind, typ, resolved.length)?;
    let filled = resolved.write_to(fill, parameter.value_mut());
    parameter.unspecified =
        ParameterUnspecified { length: resolved.length_unspecified, value: filled };
    Ok(parameter)
}

/// The parameters that are nested in an INIT, INIT-ACK or Unrecognized Parameters TLV.
pub type ParameterList = EncodedList<EncodedParameter>;

/// A parameter whose bytes live inside the chunk that embeds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedParameter {
    pub typ: u16,
    /// Offset of the parameter from the start of its chunk.
    pub offset: usize,
    /// The length of the parameter, without padding.
    pub length: usize,
    pub unspecified: ParameterUnspecified,
}

impl EmbeddedParameter {
    /// Resolves this parameter in the bytes of the chunk that embeds it.
    pub fn bytes_in<'a>(&self, chunk: &'a [u8]) -> &'a [u8] {
        &chunk[self.offset..self.offset + round_up_to_4!(self.length)]
    }
}

/// Copies the parameters, back to back and padded, into `output`, and returns how each one
/// ended up in there. `base_offset` is the offset of `output` within the chunk.
pub(crate) fn embed_parameters(
    parameters: ParameterList,
    base_offset: usize,
    output: &mut [u8],
) -> Vec<EmbeddedParameter> {
    let mut offset = 0;
    parameters
        .into_iter()
        .map(|p| {
            let size = p.encoded_length();
            output[offset..offset + size].copy_from_slice(p.bytes());
            let embedded = EmbeddedParameter {
                typ: p.typ,
                offset: base_offset + offset,
                length: p.length,
                unspecified: p.unspecified,
            };
            offset += size;
            embedded
        })
        .collect()
}

pub fn parameter_type_name(typ: u16) -> &'static str {
    use crate::packet::cookie_preservative_parameter;
    use crate::packet::ecn_capable_parameter;
    use crate::packet::heartbeat_info_parameter;
    use crate::packet::hostname_address_parameter;
    use crate::packet::ipv4_address_parameter;
    use crate::packet::ipv6_address_parameter;
    use crate::packet::pad_parameter;
    use crate::packet::state_cookie_parameter;
    use crate::packet::supported_address_types_parameter;
    use crate::packet::unrecognized_parameters_parameter;

    match typ {
        heartbeat_info_parameter::PARAMETER_TYPE => "HEARTBEAT_INFORMATION",
        ipv4_address_parameter::PARAMETER_TYPE => "IPV4_ADDRESS",
        ipv6_address_parameter::PARAMETER_TYPE => "IPV6_ADDRESS",
        state_cookie_parameter::PARAMETER_TYPE => "STATE_COOKIE",
        unrecognized_parameters_parameter::PARAMETER_TYPE => "UNRECOGNIZED_PARAMETER",
        cookie_preservative_parameter::PARAMETER_TYPE => "COOKIE_PRESERVATIVE",
        hostname_address_parameter::PARAMETER_TYPE => "HOSTNAME_ADDRESS",
        supported_address_types_parameter::PARAMETER_TYPE => "SUPPORTED_ADDRESS_TYPES",
        ecn_capable_parameter::PARAMETER_TYPE => "ECN_CAPABLE",
        pad_parameter::PARAMETER_TYPE => "PAD",
        _ => "UNKNOWN",
    }
}
