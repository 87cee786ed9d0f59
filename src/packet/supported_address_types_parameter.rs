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
use crate::packet::EncodeParameter;
use crate::packet::MAX_SCTP_PARAMETER_BYTES;
use crate::packet::ensure;
use crate::packet::list::List;
use crate::packet::parameter::EncodedParameter;
use crate::packet::parameter::PARAMETER_HEADER_SIZE;
use crate::packet::write_u16_be;

pub const PARAMETER_TYPE: u16 = 12;

/// Supported Address Types parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.2.1-2.10.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Type = 12            |          Length               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |        Address Type #1        |        Address Type #2        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            ......                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// An odd number of address types is followed by two bytes of padding, not included in the
/// length.
#[derive(Clone, Debug, Default)]
pub struct SupportedAddressTypesParameter {
    pub address_types: Option<List<u16>>,
}

impl EncodeParameter for SupportedAddressTypesParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        const KIND: &str = "SUPPORTED_ADDRESS_TYPES";
        let address_types = self.address_types.unwrap_or_default();
        let length = PARAMETER_HEADER_SIZE + address_types.len() * 2;
        ensure!(
            length <= MAX_SCTP_PARAMETER_BYTES,
            ContractViolation::TooLarge { kind: KIND, size: length, max: MAX_SCTP_PARAMETER_BYTES }
        );
        let mut parameter = EncodedParameter::new(KIND, PARAMETER_TYPE, length)?;
        for (typ, out) in address_types.iter().zip(parameter.value_mut().chunks_exact_mut(2)) {
            write_u16_be!(out, *typ);
        }
        Ok(parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_number_of_types() {
        let p = SupportedAddressTypesParameter { address_types: Some([5, 6].into_iter().collect()) }
            .encode()
            .unwrap();
        assert_eq!(p.bytes(), &[0x00, 0x0c, 0x00, 0x08, 0x00, 0x05, 0x00, 0x06]);
    }

    #[test]
    fn odd_number_of_types_is_padded() {
        let p = SupportedAddressTypesParameter { address_types: Some([5].into_iter().collect()) }
            .encode()
            .unwrap();
        assert_eq!(p.length(), 6);
        assert_eq!(p.bytes(), &[0x00, 0x0c, 0x00, 0x06, 0x00, 0x05, 0x00, 0x00]);
    }

    #[test]
    fn wildcard_has_no_entries() {
        let p = SupportedAddressTypesParameter::default().encode().unwrap();
        assert_eq!(p.bytes(), &[0x00, 0x0c, 0x00, 0x04]);
        assert!(p.unspecified().is_fully_specified());
    }
}
