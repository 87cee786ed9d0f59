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
use crate::packet::EncodeChunk;
use crate::packet::chunk::CHUNK_HEADER_SIZE;
use crate::packet::chunk::EncodedChunk;

/// A chunk of any type, with its value given verbatim. Useful to send chunk types that this
/// crate doesn't know about to the system under test, and to expect them from it.
///
/// Inbound packets are validated by the type byte alone, so types without a known chunk are
/// rejected and known types get the checks on flags and length of that type.
#[derive(Clone, Debug)]
pub struct UnknownChunk {
    pub typ: u8,
    pub flags: Option<u8>,
    pub value: Vec<u8>,
}

impl EncodeChunk for UnknownChunk {
    fn encode(self) -> Result<EncodedChunk, ContractViolation> {
        let length = CHUNK_HEADER_SIZE + self.value.len();
        let mut chunk =
            EncodedChunk::new("UNKNOWN", self.typ, self.flags, length, CHUNK_HEADER_SIZE)?;
        chunk.value_mut().copy_from_slice(&self.value);
        Ok(chunk)
    }
}
