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
use crate::packet::parameter::EncodedParameter;
use crate::packet::parameter::PARAMETER_HEADER_SIZE;
use std::net::Ipv6Addr;

pub const PARAMETER_TYPE: u16 = 6;
const PARAMETER_SIZE: usize = PARAMETER_HEADER_SIZE + 16;

/// IPv6 Address parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.2.1-2.4.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           Type = 6            |          Length = 20          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// |                         IPv6 Address                          |
/// |                                                               |
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ipv6AddressParameter {
    pub addr: Option<Ipv6Addr>,
}

impl EncodeParameter for Ipv6AddressParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        let mut parameter = EncodedParameter::new("IPV6_ADDRESS", PARAMETER_TYPE, PARAMETER_SIZE)?;
        let addr = self.addr.unwrap_or(Ipv6Addr::UNSPECIFIED);
        parameter.value_mut().copy_from_slice(&addr.octets());
        parameter.unspecified_mut().value = self.addr.is_none();
        Ok(parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_address() {
        let p = Ipv6AddressParameter { addr: Some("2001:db8::1".parse().unwrap()) }
            .encode()
            .unwrap();
        assert_eq!(p.length(), 20);
        assert_eq!(&p.bytes()[0..4], &[0x00, 0x06, 0x00, 0x14]);
        assert_eq!(&p.bytes()[4..8], &[0x20, 0x01, 0x0d, 0xb8]);
        assert_eq!(p.bytes()[19], 1);
        assert!(p.unspecified().is_fully_specified());
    }

    #[test]
    fn wildcard_is_any_address() {
        let p = Ipv6AddressParameter::default().encode().unwrap();
        assert_eq!(p.value(), &[0; 16]);
        assert!(p.unspecified().value);
    }
}
