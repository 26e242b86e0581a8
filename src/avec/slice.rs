//! Slice-based decoder implementation.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{Decoder, body::BodyError, reading::Reading};

use super::stream::Source;

/// Errors occurring while decoding from a slice.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// The slice does not begin with the start-of-frame marker.
    #[error("The slice does not begin with the start-of-frame marker.")]
    Desynchronized,
    /// Calculated and found checksum values do not match.
    #[error(transparent)]
    Checksum(#[from] BodyError),
}

/// Decode one frame from the head of a slice.
///
/// This method is also re-exported as `particule::avec::decode_slice`.
///
/// The frame must begin at the first byte; to decode from a stream capture
/// containing noise or multiple frames, replay it through a
/// [`Receiver`](super::Receiver) with a [`SliceSource`] instead.
pub fn decode(r: &[u8]) -> Result<Reading, Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    let confirmation = match Decoder::advance(take(r, i)?) {
        Left(state) => state,
        Right(_) => Err(Error::Desynchronized)?,
    };

    let body = match confirmation.advance(take(r, i)?) {
        Left(state) => state,
        Right(_) => Err(Error::Desynchronized)?,
    };

    let (reading, _) = body.advance(take(r, i)?)?;

    Ok(reading)
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    Ok(r.get(s..*i).ok_or(Error::EndOfSlice)?.try_into().unwrap())
}

/// A byte source draining the front of a slice.
///
/// Suited to replaying captured stream data through a
/// [`Receiver`](super::Receiver).
#[derive(Debug)]
pub struct SliceSource<'a>(&'a [u8]);

impl<'a> SliceSource<'a> {
    /// Create a source over a slice of captured stream bytes.
    pub fn new(r: &'a [u8]) -> Self {
        Self(r)
    }
}

impl Source for SliceSource<'_> {
    fn available(&self) -> usize {
        self.0.len()
    }

    fn peek(&mut self) -> Option<u8> {
        self.0.first().copied()
    }

    fn pop(&mut self) -> Option<u8> {
        let (b, rest) = self.0.split_first()?;
        self.0 = rest;

        Some(*b)
    }

    fn read(&mut self, r: &mut [u8]) -> Option<()> {
        let (taken, rest) = self.0.split_at_checked(r.len())?;
        r.copy_from_slice(taken);
        self.0 = rest;

        Some(())
    }
}
