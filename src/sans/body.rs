//! State verifying and decoding the frame body.

use thiserror::Error;

use super::FRAME_LENGTH;
use super::check::compute_sum;
use super::marker::{MARKER_HEAD, MARKER_TAIL, Marker};
use super::reading::Reading;

/// Number of bytes in a frame body: everything after the marker, the
/// trailing checksum included.
pub const BODY_LENGTH: usize = FRAME_LENGTH - 2;

/// An error advancing over a frame body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BodyError {
    /// Calculated and found checksum values do not match.
    #[error("Calculated ({calculated}) and found ({found}) checksum values do not match.")]
    Checksum { found: u16, calculated: u16 },
}

/// State token to verify and decode a frame body.
#[derive(Debug)]
pub struct Body(pub(super) ());

impl Body {
    /// Transition to another state by verifying and decoding a frame body.
    ///
    /// The checksum spans the marker bytes, whose values the preceding
    /// states guarantee, so their contribution seeds the sum.
    ///
    /// Returns the decoded reading and the scanning state for the next
    /// frame, or an error if the checksum does not match. Either way the
    /// bytes have been consumed; scanning resumes after them.
    pub fn advance(self, r: [u8; BODY_LENGTH]) -> Result<(Reading, Marker), BodyError> {
        let (fields, check) = r.split_at(BODY_LENGTH - 2);

        let calculated = compute_sum(MARKER_HEAD as u16 + MARKER_TAIL as u16, fields);
        let found = u16::from_be_bytes(check.try_into().unwrap());

        if found != calculated {
            Err(BodyError::Checksum { found, calculated })?;
        }

        let mut f = [0; 14];
        for (f, r) in f.iter_mut().zip(fields.chunks_exact(2)) {
            *f = u16::from_be_bytes([r[0], r[1]]);
        }

        let reading = Reading {
            frame_length: f[0],
            pm1_0_standard: f[1],
            pm2_5_standard: f[2],
            pm10_0_standard: f[3],
            pm1_0_environmental: f[4],
            pm2_5_environmental: f[5],
            pm10_0_environmental: f[6],
            particles_0_3um: f[7],
            particles_0_5um: f[8],
            particles_1_0um: f[9],
            particles_2_5um: f[10],
            particles_5_0um: f[11],
            particles_10_0um: f[12],
            reserved: f[13],
            checksum: found,
        };

        Ok((reading, Marker))
    }
}
