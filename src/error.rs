use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum Error {
    #[error("attribute 'rtpmap' not found")]
    ErrRtpMapNotFound,
    #[error("clock rate is not resolved")]
    ErrClockRateUnresolved,

    #[error("invalid rtpmap ({0})")]
    ErrInvalidRtpMap(String),
    #[error("invalid clock rate ({0})")]
    ErrInvalidClockRate(String),

    #[error("unsupported payload type {actual}, codec requires {expected}")]
    ErrUnsupportedPayloadType { expected: u8, actual: u8 },
    #[error("payload type {0} is out of range (0-127)")]
    ErrPayloadTypeOutOfRange(u8),

    #[error("payload type mismatch: expected {expected}, got {actual}")]
    ErrPayloadTypeMismatch { expected: u8, actual: u8 },
    #[error("invalid RTP version {0}")]
    ErrInvalidRtpVersion(u8),
}
