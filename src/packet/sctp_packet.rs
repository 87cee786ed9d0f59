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

use anyhow::anyhow;
use crate::api::AddressFamily;
use crate::api::Direction;
use crate::api::Ecn;
use crate::api::HeaderKind;
use crate::api::HeaderRegion;
use crate::api::IPPROTO_SCTP;
use crate::api::IpLayer;
use crate::api::Options;
use crate::logging::log_packet;
use crate::math::is_divisible_by_4;
use crate::math::round_down_to_4;
use crate::packet::ContractViolation;
use crate::packet::abort_chunk;
use crate::packet::chunk::ChunkList;
use crate::packet::chunk::ChunkUnspecified;
use crate::packet::chunk::EncodedChunk;
use crate::packet::chunk::UnspecifiedFields;
use crate::packet::chunk::chunk_type_name;
use crate::packet::cookie_ack_chunk;
use crate::packet::cookie_echo_chunk;
use crate::packet::cwr_chunk;
use crate::packet::data_chunk;
use crate::packet::ecne_chunk;
use crate::packet::error_chunk;
use crate::packet::heartbeat_ack_chunk;
use crate::packet::heartbeat_request_chunk;
use crate::packet::init_ack_chunk;
use crate::packet::init_chunk;
use crate::packet::list::List;
use crate::packet::pad_chunk;
use crate::packet::parameter::EmbeddedParameter;
use crate::packet::read_u16_be;
use crate::packet::read_u32_be;
use crate::packet::sack_chunk;
use crate::packet::shutdown_ack_chunk;
use crate::packet::shutdown_chunk;
use crate::packet::shutdown_complete_chunk;
use crate::packet::write_u16_be;
use crate::packet::write_u32_be;
use log::debug;
use log::warn;
use thiserror::Error;

pub const COMMON_HEADER_SIZE: usize = 12;

/// SCTP common header
///
/// See <https://datatracker.ietf.org/doc/html/rfc9260#section-3.1>.
///
/// ```txt
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |      Source Port Number       |    Destination Port Number    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       Verification Tag                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           Checksum                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The assembler writes it all zero. Ports and tag are filled in by later layers, as is the
/// checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommonHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub verification_tag: u32,
    pub checksum: u32,
}

impl CommonHeader {
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            source_port: read_u16_be!(&data[0..2]),
            destination_port: read_u16_be!(&data[2..4]),
            verification_tag: read_u32_be!(&data[4..8]),
            checksum: read_u32_be!(&data[8..12]),
        }
    }

    pub fn write_to(&self, output: &mut [u8]) {
        write_u16_be!(&mut output[0..2], self.source_port);
        write_u16_be!(&mut output[2..4], self.destination_port);
        write_u32_be!(&mut output[4..8], self.verification_tag);
        write_u32_be!(&mut output[8..12], self.checksum);
    }
}

/// Reasons for not assembling a packet. All but [`PacketError::Contract`] are caused by the
/// packet description, and are meant to be reported to whoever wrote it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PacketError {
    #[error(
        "IP options are not padded correctly to ensure IP header is a multiple of 4 bytes: \
         {0} excess bytes"
    )]
    IpOptionsNotPadded(usize),

    #[error("{0} must be specified for inbound packets")]
    MustBeSpecified(&'static str),

    #[error("Unknown chunk type 0x{0:02x}")]
    UnknownChunkType(u8),

    #[error("SCTP packet too large: {size} bytes, but at most {max} bytes are allowed")]
    TooLarge { size: usize, max: usize },

    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error("IP layer failed: {0}")]
    Collaborator(#[from] anyhow::Error),
}

/// A chunk that has been copied into a [`Packet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketChunk {
    pub typ: u8,
    /// Offset of the chunk within the packet buffer.
    pub offset: usize,
    /// The length of the chunk, without padding.
    pub length: usize,
    /// Number of bytes that the chunk occupies, padding included.
    pub encoded_length: usize,
    pub unspecified: ChunkUnspecified,
    /// Parameters embedded in this chunk, with offsets relative to the chunk.
    pub parameters: Vec<EmbeddedParameter>,
}

/// An assembled datagram: IP header, SCTP common header and chunks.
#[derive(Debug)]
pub struct Packet {
    direction: Direction,
    ecn: Ecn,
    buffer: Vec<u8>,
    ip_bytes: usize,
    headers: Vec<HeaderRegion>,
    chunks: List<PacketChunk>,
}

impl Packet {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn ecn(&self) -> Ecn {
        self.ecn
    }

    /// The size of the datagram, IP header included.
    pub fn ip_bytes(&self) -> usize {
        self.ip_bytes
    }

    /// The datagram.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[..self.ip_bytes]
    }

    /// The whole allocated buffer, which is larger than the datagram for overbooked packets.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// For the layers that patch in ports, tags, echoed content and checksums.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub fn is_overbooked(&self) -> bool {
        self.buffer.len() > self.ip_bytes
    }

    pub fn headers(&self) -> &[HeaderRegion] {
        &self.headers
    }

    pub fn header(&self, kind: HeaderKind) -> Option<&HeaderRegion> {
        self.headers.iter().find(|h| h.kind == kind)
    }

    pub fn common_header(&self) -> Option<CommonHeader> {
        let sctp = self.header(HeaderKind::Sctp)?;
        let end = sctp.offset + COMMON_HEADER_SIZE;
        Some(CommonHeader::from_bytes(&self.buffer[sctp.offset..end]))
    }

    pub fn chunks(&self) -> &List<PacketChunk> {
        &self.chunks
    }

    /// Returns the bytes of the `index`th chunk, padding included.
    pub fn chunk_bytes(&self, index: usize) -> Option<&[u8]> {
        let chunk = self.chunks.iter().nth(index)?;
        Some(&self.buffer[chunk.offset..chunk.offset + chunk.encoded_length])
    }

    /// Returns the bytes of the `parameter`th parameter of the `chunk`th chunk.
    pub fn parameter_bytes(&self, chunk: usize, parameter: usize) -> Option<&[u8]> {
        let bytes = self.chunk_bytes(chunk)?;
        let chunk = self.chunks.iter().nth(chunk)?;
        Some(chunk.parameters.get(parameter)?.bytes_in(bytes))
    }
}

fn require(specified: bool, what: &'static str) -> Result<(), PacketError> {
    if !specified {
        return Err(PacketError::MustBeSpecified(what));
    }
    Ok(())
}

/// Inbound packets are injected as they are, so nothing in them may be a wildcard. Returns
/// whether the packet must be overbooked, as it contains content that is filled in later.
///
/// The heartbeat info of a HEARTBEAT or HEARTBEAT-ACK is exempt, as it is echoed content.
fn validate_inbound(chunk: &EncodedChunk) -> Result<bool, PacketError> {
    let typ = chunk.typ();
    if typ != heartbeat_request_chunk::CHUNK_TYPE && typ != heartbeat_ack_chunk::CHUNK_TYPE {
        for parameter in chunk.parameters() {
            require(!parameter.unspecified.length, "parameter length")?;
            require(!parameter.unspecified.value, "parameter value")?;
        }
    }

    // Chunks built verbatim, e.g. by `UnknownChunk`, carry no type specific record. They still
    // get the checks on flags and length of their type.
    let unspecified = chunk.unspecified();
    match typ {
        data_chunk::CHUNK_TYPE => {
            require(!unspecified.flags, "chunk flags")?;
            require(!unspecified.length, "chunk length")?;
            if let UnspecifiedFields::Data(data) = unspecified.fields {
                require(!data.tsn, "TSN")?;
                require(!data.sid, "SID")?;
                require(!data.ssn, "SSN")?;
                require(!data.ppid, "PPID")?;
            }
        }
        init_chunk::CHUNK_TYPE | init_ack_chunk::CHUNK_TYPE => {
            if let UnspecifiedFields::Init(init) = unspecified.fields {
                require(!init.initiate_tag, "INITIATE_TAG")?;
                require(!init.a_rwnd, "A_RWND")?;
                require(!init.os, "OS")?;
                require(!init.is, "IS")?;
                require(!init.initial_tsn, "INITIAL_TSN")?;
                require(!init.parameters, "list of optional parameters")?;
            }
        }
        sack_chunk::CHUNK_TYPE => {
            if let UnspecifiedFields::Sack(sack) = unspecified.fields {
                require(!sack.cum_tsn, "CUM_TSN")?;
                require(!sack.a_rwnd, "A_RWND")?;
                require(!sack.gap_blocks, "GAP_BLOCKS")?;
                require(!sack.dup_tsns, "DUP_TSNS")?;
            }
        }
        shutdown_chunk::CHUNK_TYPE => {
            if let UnspecifiedFields::Shutdown { cum_tsn } = unspecified.fields {
                require(!cum_tsn, "CUM_TSN")?;
            }
        }
        ecne_chunk::CHUNK_TYPE | cwr_chunk::CHUNK_TYPE => {
            if let UnspecifiedFields::LowestTsn { lowest_tsn } = unspecified.fields {
                require(!lowest_tsn, "LOWEST_TSN")?;
            }
        }
        abort_chunk::CHUNK_TYPE | error_chunk::CHUNK_TYPE => {
            require(!unspecified.length, "error causes")?;
        }
        pad_chunk::CHUNK_TYPE => {
            require(!unspecified.length, "chunk length")?;
        }
        heartbeat_ack_chunk::CHUNK_TYPE | cookie_echo_chunk::CHUNK_TYPE => return Ok(true),
        heartbeat_request_chunk::CHUNK_TYPE
        | shutdown_ack_chunk::CHUNK_TYPE
        | cookie_ack_chunk::CHUNK_TYPE
        | shutdown_complete_chunk::CHUNK_TYPE => {}
        _ => return Err(PacketError::UnknownChunkType(typ)),
    }
    Ok(false)
}

/// Builds [`Packet`]s out of encoded chunks, using an [`IpLayer`] for the IP framing.
pub struct PacketAssembler<'a> {
    options: &'a Options,
    ip: &'a mut dyn IpLayer,
}

impl<'a> PacketAssembler<'a> {
    pub fn new(options: &'a Options, ip: &'a mut dyn IpLayer) -> Self {
        Self { options, ip }
    }

    /// Copies `chunks`, in order, into a new datagram.
    ///
    /// Inbound packets are validated to not contain any wildcards. Inbound packets with
    /// HEARTBEAT-ACK or COOKIE-ECHO chunks get a buffer of [`Options::max_datagram_size`] bytes,
    /// as echoed content is patched into them later.
    pub fn assemble(
        &mut self,
        family: AddressFamily,
        direction: Direction,
        ecn: Ecn,
        chunks: ChunkList,
    ) -> Result<Packet, PacketError> {
        let ip_option_bytes = self.options.ip_option_bytes;
        if !is_divisible_by_4!(ip_option_bytes) {
            return Err(PacketError::IpOptionsNotPadded(
                ip_option_bytes - round_down_to_4!(ip_option_bytes),
            ));
        }
        chunks.verify()?;

        let mut overbook = false;
        if direction == Direction::Inbound {
            for chunk in &chunks {
                match validate_inbound(chunk) {
                    Ok(o) => overbook |= o,
                    Err(e) => {
                        warn!("Rejecting inbound packet: {} in {}", e, chunk);
                        return Err(e);
                    }
                }
            }
        }

        let ip_header_bytes = self.ip.header_min_size(family) + ip_option_bytes;
        let sctp_bytes = COMMON_HEADER_SIZE + chunks.encoded_length();
        let ip_bytes = ip_header_bytes + sctp_bytes;
        let max = self.options.max_datagram_size;
        if ip_bytes > max {
            return Err(PacketError::TooLarge { size: ip_bytes, max });
        }

        let size = if overbook { max } else { ip_bytes };
        let mut buffer = self.ip.allocate(size)?;
        if buffer.len() < size {
            return Err(anyhow!("allocated {} bytes, but {} were requested", buffer.len(), size)
                .into());
        }
        buffer.truncate(size);
        buffer.fill(0);

        self.ip.write_header(&mut buffer, family, ip_bytes, ecn, IPPROTO_SCTP)?;
        let ip_kind = match family {
            AddressFamily::Ipv4 => HeaderKind::Ipv4,
            AddressFamily::Ipv6 => HeaderKind::Ipv6,
        };
        let headers = vec![
            HeaderRegion {
                kind: ip_kind,
                offset: 0,
                header_bytes: ip_header_bytes,
                total_bytes: ip_bytes,
            },
            HeaderRegion {
                kind: HeaderKind::Sctp,
                offset: ip_header_bytes,
                header_bytes: COMMON_HEADER_SIZE,
                total_bytes: sctp_bytes,
            },
        ];
        CommonHeader::default().write_to(&mut buffer[ip_header_bytes..]);

        let mut offset = ip_header_bytes + COMMON_HEADER_SIZE;
        let mut packet_chunks = List::new();
        for chunk in chunks {
            let (typ, length, bytes, unspecified, parameters) = chunk.into_parts();
            buffer[offset..offset + bytes.len()].copy_from_slice(&bytes);
            debug!("Adding {} at offset {}, length={}", chunk_type_name(typ), offset, length);
            packet_chunks.append(PacketChunk {
                typ,
                offset,
                length,
                encoded_length: bytes.len(),
                unspecified,
                parameters,
            });
            offset += bytes.len();
        }

        debug!(
            "Assembled {} packet: ip_bytes={}, buffer={}, chunks={}",
            direction,
            ip_bytes,
            buffer.len(),
            packet_chunks.len()
        );
        if self.options.log_packets {
            log_packet(direction, &buffer[..ip_bytes]);
        }

        Ok(Packet { direction, ecn, buffer, ip_bytes, headers, chunks: packet_chunks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::EncodeChunk;
    use crate::packet::EncodeParameter;
    use crate::packet::abort_chunk::AbortChunk;
    use crate::packet::cookie_echo_chunk::CookieEchoChunk;
    use crate::packet::data_chunk::DataChunk;
    use crate::packet::heartbeat_ack_chunk::HeartbeatAckChunk;
    use crate::packet::heartbeat_info_parameter::HeartbeatInfoParameter;
    use crate::packet::heartbeat_request_chunk::HeartbeatRequestChunk;
    use crate::packet::init_chunk::InitChunk;
    use crate::packet::ipv4_address_parameter::Ipv4AddressParameter;
    use crate::packet::parameter::ParameterList;
    use crate::packet::sack_chunk::SackChunk;
    use crate::packet::unknown_chunk::UnknownChunk;
    use crate::testing::FakeIpLayer;
    use std::net::Ipv4Addr;

    fn chunks(list: Vec<EncodedChunk>) -> ChunkList {
        list.into_iter().collect()
    }

    fn data() -> DataChunk {
        DataChunk {
            flags: Some(data_chunk::FLAG_BEGINNING | data_chunk::FLAG_END),
            length: Some(20),
            tsn: Some(1),
            sid: Some(0),
            ssn: Some(0),
            ppid: Some(0),
        }
    }

    fn assemble(
        options: &Options,
        direction: Direction,
        list: Vec<EncodedChunk>,
    ) -> (Result<Packet, PacketError>, FakeIpLayer) {
        let mut ip = FakeIpLayer::default();
        let result = PacketAssembler::new(options, &mut ip).assemble(
            AddressFamily::Ipv4,
            direction,
            Ecn::NotEct,
            chunks(list),
        );
        (result, ip)
    }

    #[test]
    fn outbound_abort() {
        let options = Options::default();
        let (packet, ip) = assemble(
            &options,
            Direction::Outbound,
            vec![AbortChunk { flags: Some(0) }.encode().unwrap()],
        );
        let packet = packet.unwrap();

        assert_eq!(packet.ip_bytes(), 20 + 12 + 4);
        assert_eq!(ip.allocations, vec![36]);
        assert!(!packet.is_overbooked());
        assert_eq!(&packet.bytes()[20..32], &[0; 12]);
        assert_eq!(&packet.bytes()[32..36], &[0x06, 0x00, 0x00, 0x04]);
        assert_eq!(packet.common_header(), Some(CommonHeader::default()));
        assert_eq!(packet.chunks().len(), 1);
        assert_eq!(packet.chunks().first().unwrap().offset, 32);
        assert_eq!(packet.chunk_bytes(0).unwrap(), &[0x06, 0x00, 0x00, 0x04]);
    }

    #[test]
    fn writes_ip_framing() {
        let options = Options::default();
        let (packet, ip) = assemble(
            &options,
            Direction::Outbound,
            vec![AbortChunk { flags: Some(0) }.encode().unwrap()],
        );
        let packet = packet.unwrap();

        assert_eq!(ip.headers_written, vec![(AddressFamily::Ipv4, 36, Ecn::NotEct, 132)]);
        assert_eq!(packet.bytes()[0], 0x45);
        assert_eq!(&packet.bytes()[2..4], &[0x00, 0x24]);
        assert_eq!(
            packet.headers(),
            &[
                HeaderRegion {
                    kind: HeaderKind::Ipv4,
                    offset: 0,
                    header_bytes: 20,
                    total_bytes: 36
                },
                HeaderRegion {
                    kind: HeaderKind::Sctp,
                    offset: 20,
                    header_bytes: 12,
                    total_bytes: 16
                },
            ]
        );
    }

    #[test]
    fn ipv6_header_size() {
        let options = Options::default();
        let mut ip = FakeIpLayer::default();
        let packet = PacketAssembler::new(&options, &mut ip)
            .assemble(
                AddressFamily::Ipv6,
                Direction::Outbound,
                Ecn::Ect0,
                chunks(vec![AbortChunk { flags: Some(0) }.encode().unwrap()]),
            )
            .unwrap();
        assert_eq!(packet.ip_bytes(), 40 + 12 + 4);
        assert_eq!(packet.header(HeaderKind::Sctp).unwrap().offset, 40);
        assert_eq!(packet.ecn(), Ecn::Ect0);
        assert_eq!(ip.headers_written, vec![(AddressFamily::Ipv6, 56, Ecn::Ect0, 132)]);
    }

    #[test]
    fn chunks_are_contiguous() {
        let options = Options::default();
        let mut parameters = ParameterList::new();
        parameters.append(
            Ipv4AddressParameter { addr: Some(Ipv4Addr::new(1, 2, 3, 4)) }.encode().unwrap(),
        );
        let init = InitChunk {
            flags: Some(0),
            initiate_tag: Some(1),
            a_rwnd: Some(2),
            os: Some(3),
            is: Some(4),
            initial_tsn: Some(5),
            parameters: Some(parameters),
        };
        let (packet, _) = assemble(
            &options,
            Direction::Inbound,
            vec![
                DataChunk { length: Some(17), ..data() }.encode().unwrap(),
                init.encode().unwrap(),
            ],
        );
        let packet = packet.unwrap();

        assert_eq!(packet.ip_bytes(), 20 + 12 + 20 + 28);
        let offsets: Vec<_> = packet.chunks().iter().map(|c| c.offset).collect();
        assert_eq!(offsets, vec![32, 52]);
        let data = packet.chunks().first().unwrap();
        assert_eq!((data.length, data.encoded_length), (17, 20));
        // The padding of the DATA chunk.
        assert_eq!(&packet.bytes()[49..52], &[0, 0, 0]);
        assert_eq!(packet.bytes()[52], init_chunk::CHUNK_TYPE);
        assert_eq!(
            packet.parameter_bytes(1, 0).unwrap(),
            &[0x00, 0x05, 0x00, 0x08, 1, 2, 3, 4]
        );
        assert_eq!(&packet.bytes()[72..80], packet.parameter_bytes(1, 0).unwrap());
        assert_eq!(packet.parameter_bytes(0, 0), None);
        assert_eq!(packet.chunk_bytes(2), None);
    }

    #[test]
    fn zeroes_the_allocated_buffer() {
        let options = Options::default();
        let (packet, _) = assemble(
            &options,
            Direction::Outbound,
            vec![DataChunk { length: Some(18), ..data() }.encode().unwrap()],
        );
        let packet = packet.unwrap();
        // The fake IP layer allocates buffers filled with 0xee.
        assert!(!packet.buffer().contains(&0xee));
    }

    #[test]
    fn outbound_sack_with_wildcards() {
        let options = Options::default();
        let sack = SackChunk {
            flags: None,
            cum_tsn: Some(100),
            a_rwnd: Some(5000),
            gap_blocks: None,
            dup_tsns: Some([7].into_iter().collect()),
        };
        let (packet, _) = assemble(&options, Direction::Outbound, vec![sack.encode().unwrap()]);
        let packet = packet.unwrap();
        let sack = packet.chunks().first().unwrap();
        assert_eq!(sack.length, 20);
        assert!(sack.unspecified.length);
        assert!(sack.unspecified.flags);
    }

    #[test]
    fn inbound_sack_with_wildcard_gaps_is_rejected() {
        let options = Options::default();
        let sack = SackChunk {
            flags: Some(0),
            cum_tsn: Some(100),
            a_rwnd: Some(5000),
            gap_blocks: None,
            dup_tsns: Some(List::new()),
        };
        let (result, ip) = assemble(&options, Direction::Inbound, vec![sack.encode().unwrap()]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "GAP_BLOCKS must be specified for inbound packets"
        );
        assert!(ip.allocations.is_empty());
    }

    #[test]
    fn inbound_data_with_wildcard_tsn_is_rejected() {
        let options = Options::default();
        let (result, ip) = assemble(
            &options,
            Direction::Inbound,
            vec![DataChunk { tsn: None, ..data() }.encode().unwrap()],
        );
        assert!(matches!(result, Err(PacketError::MustBeSpecified("TSN"))));
        assert!(ip.allocations.is_empty());
    }

    #[test]
    fn inbound_data_with_wildcard_flags_is_rejected() {
        let options = Options::default();
        let (result, _) = assemble(
            &options,
            Direction::Inbound,
            vec![DataChunk { flags: None, ..data() }.encode().unwrap()],
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "chunk flags must be specified for inbound packets"
        );
    }

    #[test]
    fn outbound_data_with_wildcards_is_accepted() {
        let options = Options::default();
        let (result, _) =
            assemble(&options, Direction::Outbound, vec![DataChunk::default().encode().unwrap()]);
        let packet = result.unwrap();
        assert_eq!(packet.ip_bytes(), 20 + 12 + 16);
    }

    #[test]
    fn inbound_parameter_wildcards_are_rejected() {
        let options = Options::default();
        let mut parameters = ParameterList::new();
        parameters.append(Ipv4AddressParameter { addr: None }.encode().unwrap());
        let init = InitChunk {
            flags: Some(0),
            initiate_tag: Some(1),
            a_rwnd: Some(2),
            os: Some(3),
            is: Some(4),
            initial_tsn: Some(5),
            parameters: Some(parameters),
        };
        let (result, _) = assemble(&options, Direction::Inbound, vec![init.encode().unwrap()]);
        assert!(matches!(result, Err(PacketError::MustBeSpecified("parameter value"))));
    }

    #[test]
    fn inbound_error_chunk_is_rejected() {
        use crate::packet::error_chunk::ErrorChunk;

        let options = Options::default();
        let (result, _) = assemble(
            &options,
            Direction::Inbound,
            vec![ErrorChunk { flags: Some(0) }.encode().unwrap()],
        );
        assert!(matches!(result, Err(PacketError::MustBeSpecified("error causes"))));
    }

    #[test]
    fn inbound_abort_with_overridden_length_is_rejected() {
        let options = Options::default();
        let abort = AbortChunk { flags: Some(0) }.encode().unwrap().override_length(8);
        let (result, _) = assemble(&options, Direction::Inbound, vec![abort]);
        assert!(matches!(result, Err(PacketError::MustBeSpecified("error causes"))));
    }

    #[test]
    fn inbound_unknown_chunk_is_rejected() {
        let options = Options::default();
        let unknown = UnknownChunk { typ: 0x49, flags: Some(0), value: vec![] };
        let (result, _) = assemble(&options, Direction::Inbound, vec![unknown.encode().unwrap()]);
        assert_eq!(result.unwrap_err().to_string(), "Unknown chunk type 0x49");
    }

    #[test]
    fn outbound_unknown_chunk_is_accepted() {
        let options = Options::default();
        let unknown = UnknownChunk { typ: 0x49, flags: Some(0), value: vec![1, 2, 3, 4] };
        let (result, _) = assemble(&options, Direction::Outbound, vec![unknown.encode().unwrap()]);
        assert_eq!(result.unwrap().chunk_bytes(0).unwrap(), &[0x49, 0, 0, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn inbound_cookie_echo_is_overbooked() {
        let options = Options::default();
        let cookie = CookieEchoChunk { flags: Some(0), length: Some(8), cookie: Some(vec![0; 4]) };
        let (result, ip) = assemble(&options, Direction::Inbound, vec![cookie.encode().unwrap()]);
        let packet = result.unwrap();

        assert_eq!(ip.allocations, vec![options.max_datagram_size]);
        assert_eq!(packet.buffer().len(), 65536);
        assert_eq!(packet.ip_bytes(), 20 + 12 + 8);
        assert_eq!(packet.bytes().len(), 40);
        assert!(packet.is_overbooked());
        assert_eq!(ip.headers_written[0].1, 40);
    }

    #[test]
    fn inbound_heartbeat_ack_is_overbooked() {
        let options = Options { max_datagram_size: 1500, ..Default::default() };
        let info = HeartbeatInfoParameter { length: Some(8), info: Some(vec![1, 2, 3, 4]) };
        let ack = HeartbeatAckChunk { flags: Some(0), info: Some(info.encode().unwrap()) };
        let (result, ip) = assemble(&options, Direction::Inbound, vec![ack.encode().unwrap()]);
        assert_eq!(result.unwrap().buffer().len(), 1500);
        assert_eq!(ip.allocations, vec![1500]);
    }

    #[test]
    fn inbound_heartbeat_ack_with_placeholder_info_is_overbooked() {
        let options = Options { max_datagram_size: 1500, ..Default::default() };
        let info = HeartbeatInfoParameter { length: Some(12), info: None };
        let ack = HeartbeatAckChunk { flags: Some(0), info: Some(info.encode().unwrap()) };
        let (result, ip) = assemble(&options, Direction::Inbound, vec![ack.encode().unwrap()]);
        let packet = result.unwrap();

        assert!(packet.is_overbooked());
        assert_eq!(ip.allocations, vec![1500]);
        assert_eq!(packet.ip_bytes(), 20 + 12 + 16);
        assert_eq!(&packet.parameter_bytes(0, 0).unwrap()[4..12], b"AAAAAAAA");
    }

    #[test]
    fn inbound_heartbeat_with_wildcard_info_length_is_accepted() {
        let options = Options::default();
        let info = HeartbeatInfoParameter { length: None, info: None };
        let heartbeat =
            HeartbeatRequestChunk { flags: Some(0), info: Some(info.encode().unwrap()) };
        let (result, ip) =
            assemble(&options, Direction::Inbound, vec![heartbeat.encode().unwrap()]);
        let packet = result.unwrap();

        assert!(!packet.is_overbooked());
        assert_eq!(ip.allocations, vec![20 + 12 + 8]);
    }

    #[test]
    fn inbound_verbatim_data_with_wildcard_flags_is_rejected() {
        let options = Options::default();
        let verbatim = UnknownChunk { typ: 0, flags: None, value: vec![] };
        let (result, ip) =
            assemble(&options, Direction::Inbound, vec![verbatim.encode().unwrap()]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "chunk flags must be specified for inbound packets"
        );
        assert!(ip.allocations.is_empty());
    }

    #[test]
    fn inbound_verbatim_sack_is_accepted() {
        let options = Options::default();
        let verbatim = UnknownChunk { typ: 3, flags: Some(0), value: vec![0; 12] };
        let (result, _) = assemble(&options, Direction::Inbound, vec![verbatim.encode().unwrap()]);
        assert_eq!(result.unwrap().chunks().len(), 1);
    }

    #[test]
    fn outbound_cookie_echo_is_not_overbooked() {
        let options = Options::default();
        let cookie = CookieEchoChunk { flags: Some(0), length: None, cookie: None };
        let (result, ip) = assemble(&options, Direction::Outbound, vec![cookie.encode().unwrap()]);
        assert!(!result.unwrap().is_overbooked());
        assert_eq!(ip.allocations, vec![36]);
    }

    #[test]
    fn too_large() {
        let options = Options { max_datagram_size: 100, ..Default::default() };
        let (result, ip) = assemble(
            &options,
            Direction::Outbound,
            vec![DataChunk { length: Some(69), ..data() }.encode().unwrap()],
        );
        assert!(matches!(result, Err(PacketError::TooLarge { size: 104, max: 100 })));
        assert!(ip.allocations.is_empty());

        let (result, _) = assemble(
            &options,
            Direction::Outbound,
            vec![DataChunk { length: Some(68), ..data() }.encode().unwrap()],
        );
        assert_eq!(result.unwrap().ip_bytes(), 100);
    }

    #[test]
    fn ip_options_must_be_padded() {
        let options = Options { ip_option_bytes: 6, ..Default::default() };
        let (result, _) = assemble(
            &options,
            Direction::Outbound,
            vec![AbortChunk { flags: Some(0) }.encode().unwrap()],
        );
        let error = result.unwrap_err();
        assert!(matches!(error, PacketError::IpOptionsNotPadded(2)));
        assert!(error.to_string().starts_with("IP options are not padded correctly"));
    }

    #[test]
    fn ip_options_extend_the_ip_header() {
        let options = Options { ip_option_bytes: 8, ..Default::default() };
        let (result, _) = assemble(
            &options,
            Direction::Outbound,
            vec![AbortChunk { flags: Some(0) }.encode().unwrap()],
        );
        let packet = result.unwrap();
        assert_eq!(packet.ip_bytes(), 28 + 12 + 4);
        assert_eq!(packet.header(HeaderKind::Sctp).unwrap().offset, 28);
        assert_eq!(packet.chunks().first().unwrap().offset, 40);
    }

    #[test]
    fn empty_packet() {
        let options = Options::default();
        let (result, _) = assemble(&options, Direction::Inbound, vec![]);
        let packet = result.unwrap();
        assert_eq!(packet.ip_bytes(), 32);
        assert!(packet.chunks().is_empty());
    }

    #[test]
    fn collaborator_failure() {
        let options = Options::default();
        let mut ip = FakeIpLayer { fail_allocation: true, ..Default::default() };
        let result = PacketAssembler::new(&options, &mut ip).assemble(
            AddressFamily::Ipv4,
            Direction::Outbound,
            Ecn::NotEct,
            chunks(vec![AbortChunk { flags: Some(0) }.encode().unwrap()]),
        );
        assert!(matches!(result, Err(PacketError::Collaborator(_))));
    }

    #[test]
    fn logs_packets() {
        let options = Options { log_packets: true, ..Default::default() };
        let (result, _) = assemble(
            &options,
            Direction::Outbound,
            vec![AbortChunk { flags: Some(0) }.encode().unwrap()],
        );
        assert!(result.is_ok());
    }
}
