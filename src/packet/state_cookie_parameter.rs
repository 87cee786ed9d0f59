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

pub const PARAMETER_TYPE: u16 = 7;

/// State Cookie parameter
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.3.3.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Type = 7             |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                            Cookie                             /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateCookieParameter {
    pub length: Option<usize>,
    pub cookie: Option<Vec<u8>>,
}

impl EncodeParameter for StateCookieParameter {
    fn encode(self) -> Result<EncodedParameter, ContractViolation> {
        encode_opaque("STATE_COOKIE", PARAMETER_TYPE, self.length, self.cookie.as_deref(), b'A')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::parameter::ParameterUnspecified;

    #[test]
    fn with_cookie() {
        let p = StateCookieParameter { length: Some(9), cookie: Some(b"cooki".to_vec()) }
            .encode()
            .unwrap();
        assert_eq!(p.length(), 9);
        assert_eq!(p.bytes(), &[0x00, 0x07, 0x00, 0x09, b'c', b'o', b'o', b'k', b'i', 0, 0, 0]);
        assert!(p.unspecified().is_fully_specified());
    }

    #[test]
    fn without_cookie() {
        let p = StateCookieParameter { length: Some(8), cookie: None }.encode().unwrap();
        assert_eq!(p.value(), b"AAAA");
        assert_eq!(p.unspecified(), ParameterUnspecified { length: false, value: true });
    }

    #[test]
    fn rejects_oversized_cookie() {
        assert!(matches!(
            StateCookieParameter { length: Some(70000), cookie: None }.encode(),
            Err(ContractViolation::LengthOutOfRange { length: 70000, .. })
        ));
    }
}
