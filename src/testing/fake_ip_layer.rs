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

use anyhow::ensure;
use crate::api::AddressFamily;
use crate::api::Ecn;
use crate::api::IpLayer;
use crate::packet::write_u16_be;

const IPV4_HEADER_SIZE: usize = 20;
const IPV6_HEADER_SIZE: usize = 40;

/// An IP layer that writes just enough of an IP header to be recognizable, and records how it
/// was used.
#[derive(Default)]
pub struct FakeIpLayer {
    /// Sizes of all allocated buffers.
    pub allocations: Vec<usize>,
    /// Family, total size, ECN and protocol of all written headers.
    pub headers_written: Vec<(AddressFamily, usize, Ecn, u8)>,
    pub fail_allocation: bool,
}

impl IpLayer for FakeIpLayer {
    fn header_min_size(&self, family: AddressFamily) -> usize {
        match family {
            AddressFamily::Ipv4 => IPV4_HEADER_SIZE,
            AddressFamily::Ipv6 => IPV6_HEADER_SIZE,
        }
    }

    fn allocate(&mut self, size: usize) -> anyhow::Result<Vec<u8>> {
        ensure!(!self.fail_allocation, "out of memory");
        self.allocations.push(size);
        // Dirty, so that tests notice if the buffer isn't zeroed.
        Ok(vec![0xee; size])
    }

    fn write_header(
        &mut self,
        buffer: &mut [u8],
        family: AddressFamily,
        total_size: usize,
        ecn: Ecn,
        protocol: u8,
    ) -> anyhow::Result<()> {
        ensure!(buffer.len() >= total_size, "buffer too small for {total_size} bytes");
        match family {
            AddressFamily::Ipv4 => {
                buffer[0] = 0x45;
                buffer[1] = ecn.codepoint();
                write_u16_be!(&mut buffer[2..4], total_size as u16);
                buffer[8] = 64;
                buffer[9] = protocol;
            }
            AddressFamily::Ipv6 => {
                buffer[0] = 0x60;
                buffer[1] = ecn.codepoint() << 4;
                write_u16_be!(&mut buffer[4..6], (total_size - IPV6_HEADER_SIZE) as u16);
                buffer[6] = protocol;
                buffer[7] = 64;
            }
        }
        self.headers_written.push((family, total_size, ecn, protocol));
        Ok(())
    }
}
