//! Poll-based decoder implementation.

use either::Either::{Left, Right};

use crate::sans::{
    Decoder, FRAME_LENGTH,
    body::{BODY_LENGTH, BodyError},
    reading::Reading,
};

#[cfg(feature = "std")]
extern crate std;

/// A non-blocking source of stream bytes.
///
/// Every call returns immediately: a source with nothing buffered reports
/// so, rather than waiting for the link. A [`Receiver`] consumes bytes
/// destructively during synchronization, so a source must be drained by
/// exactly one receiver.
pub trait Source {
    /// The number of bytes ready to be consumed without blocking.
    fn available(&self) -> usize;

    /// The next byte, without consuming it, if one is ready.
    fn peek(&mut self) -> Option<u8>;

    /// Consume and return the next byte, if one is ready.
    fn pop(&mut self) -> Option<u8>;

    /// Consume exactly `r.len()` bytes into `r`, or consume nothing if
    /// fewer are ready.
    fn read(&mut self, r: &mut [u8]) -> Option<()> {
        if self.available() < r.len() {
            return None;
        }

        for b in r.iter_mut() {
            *b = self.pop()?;
        }

        Some(())
    }
}

#[cfg(feature = "std")]
impl Source for std::collections::VecDeque<u8> {
    fn available(&self) -> usize {
        self.len()
    }

    fn peek(&mut self) -> Option<u8> {
        self.front().copied()
    }

    fn pop(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

/// Outcome of polling a receiver.
#[derive(Debug, PartialEq, Eq)]
pub enum Poll {
    /// Not enough bytes are buffered to make progress. Poll again once the
    /// source has received more data.
    NotReady,
    /// A frame was captured, verified, and decoded.
    Decoded(Reading),
    /// A captured frame failed verification and was discarded. The receiver
    /// has already returned to scanning; no action is required.
    Rejected(BodyError),
}

/// An incremental decoder polling a byte source.
///
/// Each call to [`poll`](Receiver::poll) advances by at most one frame's
/// worth of work and returns immediately, making the receiver suitable for
/// cooperative schedulers and bare polling loops alike. While scanning for a
/// frame, at most one byte of noise is discarded per poll.
#[derive(Debug)]
pub struct Receiver<S> {
    source: S,
    latest: Option<Reading>,
}

impl<S: Source> Receiver<S> {
    /// Create a receiver draining the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            latest: None,
        }
    }

    /// Advance by at most one frame's worth of work.
    ///
    /// Returns immediately in every case. A frame is only consumed from the
    /// source once it is buffered in full, so a partially-arrived frame is
    /// left untouched for later polls.
    pub fn poll(&mut self) -> Poll {
        let Some(head) = self.source.peek() else {
            return Poll::NotReady;
        };

        let confirmation = match Decoder::advance([head]) {
            Left(state) => state,
            Right(_) => {
                // Noise. Discard the byte and rescan on the next poll.
                self.source.pop();
                return Poll::NotReady;
            }
        };

        if self.source.available() < FRAME_LENGTH {
            return Poll::NotReady;
        }

        // A full frame is buffered behind the marker head. Consume the head,
        // then examine the confirmation byte without consuming it.
        self.source.pop();

        let Some(tail) = self.source.peek() else {
            return Poll::NotReady;
        };

        let body = match confirmation.advance([tail]) {
            Left(state) => state,
            Right(_) => {
                // A false synchronization. Only the false head has been
                // consumed; the examined byte stays in the stream, as it may
                // begin a genuine frame.
                return Poll::NotReady;
            }
        };

        self.source.pop();

        let mut r = [0; BODY_LENGTH];
        if self.source.read(&mut r).is_none() {
            return Poll::NotReady;
        }

        match body.advance(r) {
            Ok((reading, _)) => {
                self.latest = Some(reading);
                Poll::Decoded(reading)
            }
            Err(err) => Poll::Rejected(err),
        }
    }

    /// The most recent verified reading, if any frame has been decoded.
    ///
    /// Overwritten by each successful decode; unaffected by polls that do
    /// not produce a frame.
    pub fn latest(&self) -> Option<Reading> {
        self.latest
    }

    /// Access the underlying byte source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably access the underlying byte source, for example to feed it
    /// between polls.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the receiver, returning the underlying byte source.
    pub fn into_source(self) -> S {
        self.source
    }
}
