
use std::any::Any;
use std::fmt;

use bytes::Bytes;
use rtp::header::Header;
use rtp::packet::Packet;

use super::*;
use crate::clock_rate::find_clock_rate;
use crate::error::{Error, Result};

pub const CODEC_NAME: &str = "Generic";

/// Generic is the format of payload types without dedicated support.
/// Its clock rate comes from the static payload type table or the rtpmap
/// attribute; fmtp is kept verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Generic {
    pub payload_type: u8,
    pub rtp_map: String,
    pub fmtp: Option<FormatParams>,

    // filled by init()
    clock_rate: Option<u32>,
}

impl Generic {
    /// init resolves the clock rate. A resolution failure is not returned: the
    /// clock rate stays unresolved and clock_rate() reports 0. Use
    /// resolved_clock_rate() to tell the two apart.
    pub fn init(&mut self) {
        self.clock_rate = match find_clock_rate(self.payload_type, &self.rtp_map) {
            Ok(clock_rate) => Some(clock_rate),
            Err(err) => {
                log::warn!(
                    "unable to resolve clock rate of payload type {}: {}",
                    self.payload_type,
                    err
                );
                None
            }
        };
    }

    pub fn resolved_clock_rate(&self) -> Option<u32> {
        self.clock_rate
    }

    pub fn is_resolved(&self) -> bool {
        self.clock_rate.is_some()
    }

    fn check_stream_params(&self) -> Result<()> {
        if self.payload_type > MAX_PAYLOAD_TYPE {
            return Err(Error::ErrPayloadTypeOutOfRange(self.payload_type));
        }
        if self.clock_rate.is_none() {
            return Err(Error::ErrClockRateUnresolved);
        }
        Ok(())
    }
}

impl fmt::Display for Generic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec())
    }
}

impl Format for Generic {
    /// Media type and encoding name are informational and ignored.
    fn unmarshal(&mut self, desc: &FormatDescription) -> Result<()> {
        self.payload_type = desc.payload_type;
        self.rtp_map = desc.rtp_map.clone();
        self.fmtp = Some(desc.fmtp.clone());
        self.init();
        Ok(())
    }

    fn codec(&self) -> &str {
        CODEC_NAME
    }

    fn clock_rate(&self) -> u32 {
        self.clock_rate.unwrap_or(0)
    }

    fn payload_type(&self) -> u8 {
        self.payload_type
    }

    fn rtp_map(&self) -> &str {
        &self.rtp_map
    }

    fn fmtp(&self) -> Option<&FormatParams> {
        self.fmtp.as_ref()
    }

    fn pts_equals_dts(&self, _pkt: &Packet) -> bool {
        true
    }

    fn create_encoder(&self) -> Result<Box<dyn Encoder + Send + Sync>> {
        self.check_stream_params()?;
        Ok(Box::new(GenericEncoder::new(self.payload_type)))
    }

    fn create_decoder(&self) -> Result<Box<dyn Decoder + Send + Sync>> {
        self.check_stream_params()?;
        Ok(Box::new(GenericDecoder::new(self.payload_type)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// GenericEncoder wraps opaque payloads into RTP packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericEncoder {
    payload_type: u8,
    ssrc: u32,
}

impl GenericEncoder {
    pub fn new(payload_type: u8) -> Self {
        GenericEncoder {
            payload_type,
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

impl Encoder for GenericEncoder {
    fn encode(&self, payload: &[u8], timestamp: u32) -> Result<Packet> {
        Ok(Packet {
            header: Header {
                version: RTP_VERSION,
                marker: true,
                payload_type: self.payload_type,
                timestamp,
                ssrc: self.ssrc,
                ..Default::default()
            },
            payload: Bytes::copy_from_slice(payload),
        })
    }
}

/// GenericDecoder returns packet payloads as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericDecoder {
    payload_type: u8,
}

impl GenericDecoder {
    pub fn new(payload_type: u8) -> Self {
        GenericDecoder { payload_type }
    }
}

impl Decoder for GenericDecoder {
    fn decode(&self, pkt: &Packet) -> Result<(Bytes, u32)> {
        check_packet(pkt, self.payload_type)?;
        Ok((pkt.payload.clone(), pkt.header.timestamp))
    }
}

/// check_packet validates the header fields every decoder relies on.
pub(crate) fn check_packet(pkt: &Packet, payload_type: u8) -> Result<()> {
    if pkt.header.version != RTP_VERSION {
        log::trace!("dropping packet with RTP version {}", pkt.header.version);
        return Err(Error::ErrInvalidRtpVersion(pkt.header.version));
    }
    if pkt.header.payload_type != payload_type {
        log::trace!(
            "dropping packet with payload type {}, expected {}",
            pkt.header.payload_type,
            payload_type
        );
        return Err(Error::ErrPayloadTypeMismatch {
            expected: payload_type,
            actual: pkt.header.payload_type,
        });
    }
    Ok(())
}
