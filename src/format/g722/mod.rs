#[cfg(test)]
mod g722_test;

use std::any::Any;
use std::fmt;

use bytes::Bytes;
use rtp::header::Header;
use rtp::packet::Packet;

use super::generic::check_packet;
use super::*;
use crate::error::{Error, Result};

pub const CODEC_NAME: &str = "G722";
/// Lowercased encoding name as found in rtpmap.
pub const ENCODING_NAME: &str = "g722";
pub const PAYLOAD_TYPE: u8 = 9;
/// G722 samples at 16kHz but RFC 3551 fixes its RTP clock at 8kHz.
pub const CLOCK_RATE: u32 = 8000;
pub const RTP_MAP: &str = "G722/8000";

/// G722 is the G.722 audio format (RFC 3551). Payload type and clock rate are
/// fixed; frames are carried one per packet without transcoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G722 {
    payload_type: u8,
}

impl Default for G722 {
    fn default() -> Self {
        G722 {
            payload_type: PAYLOAD_TYPE,
        }
    }
}

impl G722 {
    fn check_payload_type(&self) -> Result<()> {
        if self.payload_type != PAYLOAD_TYPE {
            return Err(Error::ErrUnsupportedPayloadType {
                expected: PAYLOAD_TYPE,
                actual: self.payload_type,
            });
        }
        Ok(())
    }
}

impl fmt::Display for G722 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CODEC_NAME)
    }
}

impl Format for G722 {
    fn unmarshal(&mut self, desc: &FormatDescription) -> Result<()> {
        self.payload_type = desc.payload_type;
        Ok(())
    }

    fn codec(&self) -> &str {
        CODEC_NAME
    }

    fn clock_rate(&self) -> u32 {
        CLOCK_RATE
    }

    fn payload_type(&self) -> u8 {
        self.payload_type
    }

    fn rtp_map(&self) -> &str {
        RTP_MAP
    }

    fn fmtp(&self) -> Option<&FormatParams> {
        None
    }

    fn pts_equals_dts(&self, _pkt: &Packet) -> bool {
        true
    }

    fn create_encoder(&self) -> Result<Box<dyn Encoder + Send + Sync>> {
        self.check_payload_type()?;
        Ok(Box::new(G722Encoder::new()))
    }

    fn create_decoder(&self) -> Result<Box<dyn Decoder + Send + Sync>> {
        self.check_payload_type()?;
        Ok(Box::new(G722Decoder))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// G722Encoder places each G.722 frame in its own RTP packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G722Encoder {
    ssrc: u32,
}

impl Default for G722Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl G722Encoder {
    pub fn new() -> Self {
        G722Encoder {
            ssrc: rand::random::<u32>(),
        }
    }

    pub fn with_ssrc(mut self, ssrc: u32) -> Self {
        self.ssrc = ssrc;
        self
    }

    pub fn ssrc(&self) -> u32 {
        self.ssrc
    }
}

impl Encoder for G722Encoder {
    fn encode(&self, frame: &[u8], timestamp: u32) -> Result<Packet> {
        Ok(Packet {
            header: Header {
                version: RTP_VERSION,
                marker: true,
                payload_type: PAYLOAD_TYPE,
                timestamp,
                ssrc: self.ssrc,
                ..Default::default()
            },
            payload: Bytes::copy_from_slice(frame),
        })
    }
}

/// G722Decoder returns the G.722 frame carried by a packet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct G722Decoder;

impl Decoder for G722Decoder {
    fn decode(&self, pkt: &Packet) -> Result<(Bytes, u32)> {
        check_packet(pkt, PAYLOAD_TYPE)?;
        Ok((pkt.payload.clone(), pkt.header.timestamp))
    }
}
