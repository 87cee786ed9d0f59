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
use crate::packet::list::Encoded;
use crate::packet::parameter::EncodedParameter;
use crate::packet::parameter::PARAMETER_HEADER_SIZE;
use crate::packet::parameter::ParameterList;

pub const PARAMETER_TYPE: u16 = 8;

/// Unrecognized Parameter parameter, wrapping the parameters that weren't understood.
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.3.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Type = 8             |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                  Unrecognized Parameters                      /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Default)]
pub struct UnrecognizedParametersParameter {
    pub parameters: Option<ParameterList>,
}

impl EncodeParameter for UnrecognizedParametersParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        const KIND: &str = "UNRECOGNIZED_PARAMETER";
        let Some(parameters) = self.parameters else {
            let mut parameter = EncodedParameter::new(KIND, PARAMETER_TYPE, PARAMETER_HEADER_SIZE)?;
            let unspecified = parameter.unspecified_mut();
            unspecified.length = true;
            unspecified.value = true;
            return Ok(parameter);
        };

        parameters.verify()?;
        let length = PARAMETER_HEADER_SIZE + parameters.declared_length();
        ensure!(
            length <= MAX_SCTP_PARAMETER_BYTES,
            ContractViolation::TooLarge { kind: KIND, size: length, max: MAX_SCTP_PARAMETER_BYTES }
        );
        let mut parameter = EncodedParameter::new(KIND, PARAMETER_TYPE, length)?;
        let mut offset = PARAMETER_HEADER_SIZE;
        for child in parameters {
            let size = child.encoded_length();
            // The padding of the last child lands in this parameter's own padding.
            parameter.bytes_mut()[offset..offset + size].copy_from_slice(child.bytes());
            *parameter.unspecified_mut() |= child.unspecified();
            offset += size;
        }
        Ok(parameter)
    }
}
