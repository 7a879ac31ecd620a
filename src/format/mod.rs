
pub mod g722;
pub mod generic;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use rtp::packet::Packet;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use g722::{G722Decoder, G722Encoder, G722};
pub use generic::{Generic, GenericDecoder, GenericEncoder};

/// RTP version stamped by every encoder.
pub const RTP_VERSION: u8 = 2;

/// Highest payload type representable in the 7-bit RTP header field.
pub const MAX_PAYLOAD_TYPE: u8 = 127;

/// FormatParams holds fmtp key/value pairs.
pub type FormatParams = HashMap<String, String>;

/// FormatDescription is one media format as extracted from a session description
/// by the negotiation layer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatDescription {
    pub media_type: String,
    pub payload_type: u8,
    pub encoding_name: String,
    pub rtp_map: String,
    pub fmtp: FormatParams,
}

impl FormatDescription {
    /// encoding returns the encoding name, lowercased, falling back to the
    /// first rtpmap field when no explicit name was given.
    pub fn encoding(&self) -> String {
        let name = if self.encoding_name.is_empty() {
            self.rtp_map.split('/').next().unwrap_or_default()
        } else {
            self.encoding_name.as_str()
        };
        name.to_lowercase()
    }
}

/// Format is an RTP payload format: the identity, timing and packetization
/// rules of one negotiated media stream.
///
/// unmarshal must be called once before any other method; accessors called
/// earlier return zero values.
pub trait Format: fmt::Debug + fmt::Display + Send + Sync {
    fn unmarshal(&mut self, desc: &FormatDescription) -> Result<()>;

    /// codec returns the codec name.
    fn codec(&self) -> &str;

    /// clock_rate returns the rate at which RTP timestamps advance, in Hz.
    fn clock_rate(&self) -> u32;

    fn payload_type(&self) -> u8;

    /// rtp_map returns the rtpmap attribute, or an empty string.
    fn rtp_map(&self) -> &str;

    /// fmtp returns the format parameters, if any.
    fn fmtp(&self) -> Option<&FormatParams>;

    /// pts_equals_dts reports whether the presentation timestamp of the packet
    /// equals its decode timestamp.
    fn pts_equals_dts(&self, pkt: &Packet) -> bool;

    fn create_encoder(&self) -> Result<Box<dyn Encoder + Send + Sync>>;

    fn create_decoder(&self) -> Result<Box<dyn Decoder + Send + Sync>>;

    fn as_any(&self) -> &dyn Any;
}

/// Encoder turns one unit of media into one RTP packet.
pub trait Encoder: fmt::Debug {
    fn encode(&self, payload: &[u8], timestamp: u32) -> Result<Packet>;
}

/// Decoder extracts the media unit and its RTP timestamp from one RTP packet.
pub trait Decoder: fmt::Debug {
    fn decode(&self, pkt: &Packet) -> Result<(Bytes, u32)>;
}

/// unmarshal picks the format implementation for a description and initializes it.
pub fn unmarshal(desc: &FormatDescription) -> Result<Box<dyn Format>> {
    let encoding = desc.encoding();

    let mut format: Box<dyn Format> = match encoding.as_str() {
        g722::ENCODING_NAME => Box::<G722>::default(),
        "" if desc.payload_type == g722::PAYLOAD_TYPE => Box::<G722>::default(),
        _ => Box::<Generic>::default(),
    };

    format.unmarshal(desc)?;
    log::debug!(
        "payload type {} ({:?}) mapped to {} format",
        desc.payload_type,
        encoding,
        format.codec()
    );

    Ok(format)
}
