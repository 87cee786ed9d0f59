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

//! Builds SCTP packets out of declarative descriptions, for use by network test drivers.
//!
//! Every field of a chunk or parameter description may be left as a wildcard. The encoders then
//! write a placeholder and record which fields were unspecified, so that a packet received from
//! the system under test can later be matched against the description.

pub mod api;
pub mod packet;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) mod logging {
    use crate::api::Direction;
    #[cfg(not(test))]
    use log::info;
    use std::fmt::Write;
    #[cfg(test)]
    use std::println as info;
    use std::string::String;

    /// Logs `data` in a format that `text2pcap` understands, e.g. with
    /// `grep SCTP_PACKET log.txt | text2pcap -t "%H:%M:%S." - out.pcap`.
    pub fn log_packet(direction: Direction, data: &[u8]) {
        let s = data.iter().fold(String::new(), |mut output, c| {
            let _ = write!(output, " {c:02x}");
            output
        });
        let prefix = match direction {
            Direction::Inbound => "I",
            Direction::Outbound => "O",
        };
        info!("{} 00:00:00.000 0000{} # SCTP_PACKET {}", prefix, s, direction);
    }
}

pub(crate) mod math {
    macro_rules! round_up_to_4 {
        ($a: expr) => {
            ($a + 3) & !3
        };
    }

    macro_rules! round_down_to_4 {
        ($a: expr) => {
            $a & !3
        };
    }

    macro_rules! is_divisible_by_4 {
        ($a: expr) => {
            ($a % 4) == 0
        };
    }

    pub(crate) use is_divisible_by_4;
    pub(crate) use round_down_to_4;
    pub(crate) use round_up_to_4;
}
