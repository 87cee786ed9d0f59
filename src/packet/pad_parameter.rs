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
use crate::packet::parameter::encode_opaque;

pub const PARAMETER_TYPE: u16 = 0x8005;

/// Padding parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc4820#section-3>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Parameter Type = 0x8005   |       Parameter Length        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                                                               /
/// \                          Padding Data                         \
/// /                                                               /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct PadParameter {
    pub length: Option<usize>,
    pub padding: Option<Vec<u8>>,
}

impl EncodeParameter for PadParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        encode_opaque("PAD", PARAMETER_TYPE, self.length, self.padding.as_deref(), b'P')
    }
}
