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
use crate::packet::parameter::EncodedParameter;
use crate::packet::parameter::PARAMETER_HEADER_SIZE;

pub const PARAMETER_TYPE: u16 = 11;

/// Host Name Address parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc4960#section-3.3.2.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Type = 11            |          Length               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                          Host Name                            /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The host name is written NUL terminated. A wildcard host name is written as a single NUL.
#[derive(Clone, Debug, Default)]
pub struct HostnameAddressParameter {
    pub hostname: Option<String>,
}

impl EncodeParameter for HostnameAddressParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        const KIND: &str = "HOSTNAME_ADDRESS";
        let name = self.hostname.as_deref().unwrap_or("").as_bytes();
        let length = PARAMETER_HEADER_SIZE + name.len() + 1;
        ensure!(
            length <= MAX_SCTP_PARAMETER_BYTES,
            ContractViolation::TooLarge { kind: KIND, size: length, max: MAX_SCTP_PARAMETER_BYTES }
        );
        let mut parameter = EncodedParameter::new(KIND, PARAMETER_TYPE, length)?;
        // The terminating NUL is already there.
        parameter.value_mut()[..name.len()].copy_from_slice(name);
        if self.hostname.is_none() {
            let unspecified = parameter.unspecified_mut();
            unspecified.length = true;
            unspecified.value = true;
        }
        Ok(parameter)
    }
}
