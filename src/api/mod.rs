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

use std::fmt;

/// IANA protocol number for SCTP, written into the IP header by [`IpLayer::write_header`].
pub const IPPROTO_SCTP: u8 = 132;

/// The largest datagram, IP header included, that a packet may be assembled into.
pub const MAX_SCTP_DATAGRAM_BYTES: usize = 64 * 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// Whether a packet represents traffic that will be injected towards the system under test
/// (inbound), or traffic that the system under test is expected to send (outbound).
///
/// Inbound packets are put on the wire as-is, which is why they can't contain wildcards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => write!(f, "inbound"),
            Direction::Outbound => write!(f, "outbound"),
        }
    }
}

/// ECN codepoint of the IP header, see <https://datatracker.ietf.org/doc/html/rfc3168#section-5>.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ecn {
    #[default]
    NotEct,
    Ect1,
    Ect0,
    Ce,
}

impl Ecn {
    /// Returns the two-bit value that goes into the ECN field of the IP header.
    pub fn codepoint(&self) -> u8 {
        match self {
            Ecn::NotEct => 0b00,
            Ecn::Ect1 => 0b01,
            Ecn::Ect0 => 0b10,
            Ecn::Ce => 0b11,
        }
    }
}

/// Kinds of header regions that are registered on an assembled packet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    Ipv4,
    Ipv6,
    Sctp,
}

/// Marks where a protocol header starts in the packet buffer, so that later layers (port and
/// verification tag rewriting, checksum calculation) can find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderRegion {
    pub kind: HeaderKind,
    /// Offset of the header within the packet buffer.
    pub offset: usize,
    /// Size of the header itself.
    pub header_bytes: usize,
    /// Size of the header and everything it encapsulates.
    pub total_bytes: usize,
}

/// The IP layer that an SCTP packet is framed in.
///
/// The packet assembler doesn't know anything about IP headers except their size. It asks this
/// collaborator for a buffer and lets it write the IP header at the start of that buffer.
pub trait IpLayer {
    /// Returns the size of an IP header without options for `family`.
    fn header_min_size(&self, family: AddressFamily) -> usize;

    /// Returns a buffer of at least `size` bytes. The assembler zero-fills it.
    fn allocate(&mut self, size: usize) -> anyhow::Result<Vec<u8>> {
        Ok(vec![0; size])
    }

    /// Writes the IP header for a datagram of `total_size` bytes to the start of `buffer`.
    fn write_header(
        &mut self,
        buffer: &mut [u8],
        family: AddressFamily,
        total_size: usize,
        ecn: Ecn,
        protocol: u8,
    ) -> anyhow::Result<()>;
}

/// User configurable options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Assembled packets, including the IP header, may not be larger than this. It is also the
    /// buffer size that is allocated when a packet needs to be overbooked; see
    /// [`crate::packet::sctp_packet::PacketAssembler`].
    pub max_datagram_size: usize,

    /// Number of IP option bytes that the IP layer will add to its minimum header. Must be a
    /// multiple of four.
    pub ip_option_bytes: usize,

    /// Log every assembled packet as a hex dump that can be fed into `text2pcap`.
    pub log_packets: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_datagram_size: MAX_SCTP_DATAGRAM_BYTES,
            ip_option_bytes: 0,
            log_packets: false,
        }
    }
}
