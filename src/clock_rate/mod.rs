
use crate::error::{Error, Result};

/// Largest clock rate accepted from an rtpmap attribute (31 bits).
pub const MAX_CLOCK_RATE: u32 = i32::MAX as u32;

/// static_clock_rate returns the fixed clock rate of a payload type assigned by
/// the RTP audio/video profile (RFC 3551), or None for every other payload type.
/// https://en.wikipedia.org/wiki/RTP_payload_formats
pub const fn static_clock_rate(payload_type: u8) -> Option<u32> {
    match payload_type {
        0 | 1 | 2 | 3 | 4 | 5 | 7 | 8 | 9 | 12 | 13 | 15 | 18 => Some(8000),
        6 => Some(16000),
        10 | 11 => Some(44100),
        14 | 25 | 26 | 28 | 31 | 32 | 33 | 34 => Some(90000),
        16 => Some(11025),
        17 => Some(22050),
        _ => None,
    }
}

/// find_clock_rate resolves the clock rate of a payload type.
///
/// Well-known payload types always win over the rtpmap attribute, even when the
/// attribute disagrees or is malformed. Any other payload type needs an rtpmap of
/// the form `<encoding name>/<clock rate>[/<encoding parameters>]` (RFC 4566).
pub fn find_clock_rate(payload_type: u8, rtp_map: &str) -> Result<u32> {
    if let Some(clock_rate) = static_clock_rate(payload_type) {
        return Ok(clock_rate);
    }

    if rtp_map.is_empty() {
        return Err(Error::ErrRtpMapNotFound);
    }

    let fields: Vec<&str> = rtp_map.split('/').collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(Error::ErrInvalidRtpMap(rtp_map.to_owned()));
    }

    parse_clock_rate(fields[1])
}

/// parse_clock_rate accepts plain decimal digits only; signs and whitespace are rejected.
fn parse_clock_rate(s: &str) -> Result<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::ErrInvalidClockRate(s.to_owned()));
    }

    match s.parse::<u32>() {
        Ok(v) if v <= MAX_CLOCK_RATE => Ok(v),
        _ => Err(Error::ErrInvalidClockRate(s.to_owned())),
    }
}
