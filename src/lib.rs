#![no_std]

//! An incremental decoder for the Plantower PMS5003 particulate sensor's
//! wire protocol.
//!
//! Particule recovers verified measurement readings from the byte stream of
//! a PMS5003-family sensor, resynchronizing after line noise and discarding
//! corrupted frames before any of their contents can be observed. Decoding
//! is non-blocking throughout: a receiver polled without enough buffered
//! bytes returns immediately, ready to be polled again.
//!
//! Most users should begin with the polling receiver and one-shot decoders
//! in the [`avec`] module. If these prove insufficient, consider driving the
//! underlying finite-state machine directly, as described in the [`sans`]
//! module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder and standard-library byte sources
//!   (default).

pub mod avec;
pub mod sans;
