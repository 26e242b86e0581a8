//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{Decoder, body::BodyError, reading::Reading};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Calculated and found checksum values do not match.
    #[error(transparent)]
    Checksum(#[from] BodyError),
}

/// Decode one frame from a reader, scanning past bytes preceding it.
///
/// This method is also re-exported as `particule::avec::decode_reader`.
///
/// Blocks until a complete frame has been read; any blocking policy is the
/// reader's. Bytes preceding the frame marker are consumed and discarded.
/// Reaching the end of the reader surfaces as an
/// [`UnexpectedEof`](std::io::ErrorKind::UnexpectedEof) error.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read) -> Result<Reading, Error> {
    let mut byte = take(r)?;

    let body = loop {
        let confirmation = match Decoder::advance(byte) {
            Left(state) => state,
            Right(_) => {
                byte = take(r)?;
                continue;
            }
        };

        byte = take(r)?;

        match confirmation.advance(byte) {
            Left(state) => break state,
            // A failed confirmation byte may itself be a marker head, so it
            // is held and re-examined by the scanning state.
            Right(_) => continue,
        }
    };

    let (reading, _) = body.advance(take(r)?)?;

    Ok(reading)
}

/// Take an exact number of bytes from a reader.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    r.read_exact(&mut buf)?;

    Ok(buf)
}
