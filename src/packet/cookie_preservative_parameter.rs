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
use crate::packet::or_placeholder;
use crate::packet::parameter::EncodedParameter;
use crate::packet::parameter::PARAMETER_HEADER_SIZE;
use crate::packet::write_u32_be;

pub const PARAMETER_TYPE: u16 = 9;
const PARAMETER_SIZE: usize = PARAMETER_HEADER_SIZE + 4;

/// Cookie Preservative parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.2.1-2.6.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Type = 9             |          Length = 8           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         Suggested Cookie Life-Span Increment (msec.)          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct CookiePreservativeParameter {
    /// Milliseconds.
    pub increment: Option<u32>,
}

impl EncodeParameter for CookiePreservativeParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        let mut parameter =
            EncodedParameter::new("COOKIE_PRESERVATIVE", PARAMETER_TYPE, PARAMETER_SIZE)?;
        let mut unspecified = false;
        let increment = or_placeholder(self.increment, &mut unspecified);
        write_u32_be!(parameter.value_mut(), increment);
        parameter.unspecified_mut().value = unspecified;
        Ok(parameter)
    }
}
