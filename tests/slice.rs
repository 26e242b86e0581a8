use particule::avec::Reading;
use particule::avec::slice::{Error, decode};
use particule::sans::body::BodyError;

#[test]
fn decode_known_frame() {
    #[rustfmt::skip]
    let bytes = [
        0x42, 0x4D,
        0x00, 0x1C, // Frame length: 28.
        0x00, 0x05, 0x00, 0x0A, 0x00, 0x0F, // Standard PM1.0 / PM2.5 / PM10.
        0x00, 0x05, 0x00, 0x0A, 0x00, 0x0F, // Environmental PM1.0 / PM2.5 / PM10.
        0x00, 0x01, 0x00, 0x02, 0x00, 0x03, // Counts >0.3, >0.5, >1.0 um.
        0x00, 0x04, 0x00, 0x05, 0x00, 0x06, // Counts >2.5, >5.0, >10 um.
        0x00, 0x00, // Reserved.
        0x00, 0xFC, // Checksum: 252.
    ];

    let expected = Reading {
        frame_length: 28,
        pm1_0_standard: 5,
        pm2_5_standard: 10,
        pm10_0_standard: 15,
        pm1_0_environmental: 5,
        pm2_5_environmental: 10,
        pm10_0_environmental: 15,
        particles_0_3um: 1,
        particles_0_5um: 2,
        particles_1_0um: 3,
        particles_2_5um: 4,
        particles_5_0um: 5,
        particles_10_0um: 6,
        reserved: 0,
        checksum: 252,
    };

    assert_eq!(decode(&bytes), Ok(expected));
}

#[test]
fn round_trip_extreme_values() {
    let fields = [
        0xFFFF, 0x0000, 0x0001, 0x8000, 0x7FFF, 0x00FF, 0xFF00, 0xABCD, 0x1234, 0xFEDC, 0x0042,
        0x4D42, 0x4242, 0x4D4D,
    ];

    let reading = decode(&frame(fields)).unwrap();

    assert_eq!(reading.frame_length, 0xFFFF);
    assert_eq!(reading.pm1_0_standard, 0x0000);
    assert_eq!(reading.pm2_5_standard, 0x0001);
    assert_eq!(reading.pm10_0_standard, 0x8000);
    assert_eq!(reading.pm1_0_environmental, 0x7FFF);
    assert_eq!(reading.pm2_5_environmental, 0x00FF);
    assert_eq!(reading.pm10_0_environmental, 0xFF00);
    assert_eq!(reading.particles_0_3um, 0xABCD);
    assert_eq!(reading.particles_0_5um, 0x1234);
    assert_eq!(reading.particles_1_0um, 0xFEDC);
    assert_eq!(reading.particles_2_5um, 0x0042);
    assert_eq!(reading.particles_5_0um, 0x4D42);
    assert_eq!(reading.particles_10_0um, 0x4242);
    assert_eq!(reading.reserved, 0x4D4D);
}

#[test]
fn every_single_bit_flip_fails() {
    let fields = [28, 101, 202, 303, 404, 505, 606, 11, 22, 33, 44, 55, 66, 0];

    for bit in 0..256 {
        let mut bytes = frame(fields);
        bytes[bit / 8] ^= 1 << (bit % 8);

        match decode(&bytes) {
            // A flip inside the marker prevents synchronization outright;
            // the checksum is never consulted.
            Err(Error::Desynchronized) if bit < 16 => (),
            // A flip anywhere else, the stored checksum included, is caught
            // by verification.
            Err(Error::Checksum(BodyError::Checksum { found, calculated })) if bit >= 16 => {
                assert_ne!(found, calculated);
            }
            outcome => panic!("bit {bit}: unexpected outcome {outcome:?}"),
        }
    }
}

#[test]
fn truncated_slice() {
    let bytes = frame([28, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0]);

    assert_eq!(decode(&[]), Err(Error::EndOfSlice));
    assert_eq!(decode(&bytes[..2]), Err(Error::EndOfSlice));
    assert_eq!(decode(&bytes[..31]), Err(Error::EndOfSlice));
}

#[test]
fn missing_marker() {
    let mut bytes = frame([28, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0]);

    bytes[0] = 0x4D;
    assert_eq!(decode(&bytes), Err(Error::Desynchronized));

    bytes[0] = 0x42;
    bytes[1] = 0x42;
    assert_eq!(decode(&bytes), Err(Error::Desynchronized));

    assert_eq!(decode(&[0x00; 32]), Err(Error::Desynchronized));
}

#[test]
fn trailing_bytes_ignored() {
    let fields = [28, 7, 8, 9, 1, 2, 3, 600, 500, 400, 300, 200, 100, 0];

    let mut bytes = frame(fields).to_vec();
    bytes.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    assert!(decode(&bytes).is_ok());
}

fn frame(fields: [u16; 14]) -> [u8; 32] {
    let mut r = [0; 32];
    r[0] = 0x42;
    r[1] = 0x4D;

    for (i, f) in fields.iter().enumerate() {
        r[2 + 2 * i..4 + 2 * i].copy_from_slice(&f.to_be_bytes());
    }

    let sum = r[..30].iter().fold(0u16, |acc, b| acc.wrapping_add(*b as u16));
    r[30..].copy_from_slice(&sum.to_be_bytes());

    r
}
