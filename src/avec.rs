//! Convenience interfaces for common decoding patterns.
//!
//! The receiver in the [`stream`] module incrementally decodes frames from a
//! polled, non-blocking byte source, and is the interface suited to live
//! sensor links. The functions in the [`slice`] and [`reader`] modules
//! decode one frame from captured data and from blocking readers.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod stream;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
pub use stream::{Poll, Receiver, Source};

pub use crate::sans::reading::Reading;
