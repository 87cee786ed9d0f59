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

pub const PARAMETER_TYPE: u16 = 0x8000;

/// ECN Capable parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#appendix-A>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Parameter Type = 0x8000   |     Parameter Length = 4      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct EcnCapableParameter {}

impl EncodeParameter for EcnCapableParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        EncodedParameter::new("ECN_CAPABLE", PARAMETER_TYPE, PARAMETER_HEADER_SIZE)
    }
}
