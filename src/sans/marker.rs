//! States synchronizing on the start-of-frame marker.

use either::Either::{self, Left, Right};

use super::body::Body;

/// First byte of the start-of-frame marker.
pub const MARKER_HEAD: u8 = 0x42;

/// Second byte of the start-of-frame marker.
pub const MARKER_TAIL: u8 = 0x4D;

/// State token to scan for the first marker byte.
#[derive(Debug)]
pub struct Marker;

impl Marker {
    /// Transition to another state by examining one stream byte.
    ///
    /// Returns the confirmation state if the byte is the first marker byte,
    /// or the scanning state again if the byte was noise and has been
    /// discarded.
    pub fn advance(r: [u8; 1]) -> Either<Confirmation, Marker> {
        if r[0] == MARKER_HEAD {
            Left(Confirmation(()))
        } else {
            Right(Marker)
        }
    }
}

/// State token to confirm the second marker byte.
#[derive(Debug)]
pub struct Confirmation(pub(super) ());

impl Confirmation {
    /// Transition to another state by examining the byte following a marker
    /// head.
    ///
    /// Returns the frame body state if the byte is the second marker byte.
    /// Otherwise the synchronization was a false positive and the successor
    /// is the scanning state. **A byte that fails confirmation has not been
    /// synchronized over**: it may itself be a marker head, and should be
    /// fed to the returned scanning state rather than discarded. See the
    /// architecture description in the [`crate::sans`] module documentation.
    pub fn advance(self, r: [u8; 1]) -> Either<Body, Marker> {
        if r[0] == MARKER_TAIL {
            Left(Body(()))
        } else {
            Right(Marker)
        }
    }
}
