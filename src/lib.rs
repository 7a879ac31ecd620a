#![warn(rust_2018_idioms)]

//! RTP payload formats.
//!
//! A [`Format`](format::Format) ties an RTP payload type to a codec: its clock
//! rate, SDP attributes and an encoder/decoder pair converting media units to
//! and from RTP packets. Payload types without dedicated support are handled by
//! [`Generic`](format::Generic), whose clock rate comes from
//! [`find_clock_rate`](clock_rate::find_clock_rate).

pub mod clock_rate;
mod error;
pub mod format;

pub use error::{Error, Result};
