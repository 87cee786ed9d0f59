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
use std::net::Ipv4Addr;

pub const PARAMETER_TYPE: u16 = 5;
const PARAMETER_SIZE: usize = PARAMETER_HEADER_SIZE + 4;

/// IPv4 Address parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.2.1-2.2.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           Type = 5            |          Length = 8           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         IPv4 Address                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// A wildcard address is written as `0.0.0.0`.
#[derive(Clone, Debug, Default)]
pub struct Ipv4AddressParameter {
    pub addr: Option<Ipv4Addr>,
}

impl EncodeParameter for Ipv4AddressParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        let mut parameter = EncodedParameter::new("IPV4_ADDRESS", PARAMETER_TYPE, PARAMETER_SIZE)?;
        let addr = self.addr.unwrap_or(Ipv4Addr::UNSPECIFIED);
        parameter.value_mut().copy_from_slice(&addr.octets());
        parameter.unspecified_mut().value = self.addr.is_none();
        Ok(parameter)
    }
}
