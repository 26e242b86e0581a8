//! The decoded measurement record.

/// One verified sensor reading, decoded from a single frame.
///
/// Fields appear in frame order. Mass concentrations are reported twice, under
/// the sensor's two calibrations: "standard" (calibrated against industrial
/// metal particles) and "environmental" (calibrated for atmospheric
/// monitoring).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Length in bytes of the frame body, as reported by the sensor.
    pub frame_length: u16,
    /// Mass concentration PM1.0 [µg/m³], standard calibration.
    pub pm1_0_standard: u16,
    /// Mass concentration PM2.5 [µg/m³], standard calibration.
    pub pm2_5_standard: u16,
    /// Mass concentration PM10 [µg/m³], standard calibration.
    pub pm10_0_standard: u16,
    /// Mass concentration PM1.0 [µg/m³], environmental calibration.
    pub pm1_0_environmental: u16,
    /// Mass concentration PM2.5 [µg/m³], environmental calibration.
    pub pm2_5_environmental: u16,
    /// Mass concentration PM10 [µg/m³], environmental calibration.
    pub pm10_0_environmental: u16,
    /// Particles larger than 0.3 µm per 0.1 L of air.
    pub particles_0_3um: u16,
    /// Particles larger than 0.5 µm per 0.1 L of air.
    pub particles_0_5um: u16,
    /// Particles larger than 1.0 µm per 0.1 L of air.
    pub particles_1_0um: u16,
    /// Particles larger than 2.5 µm per 0.1 L of air.
    pub particles_2_5um: u16,
    /// Particles larger than 5.0 µm per 0.1 L of air.
    pub particles_5_0um: u16,
    /// Particles larger than 10 µm per 0.1 L of air.
    pub particles_10_0um: u16,
    /// Reserved by the sensor; contents unspecified.
    pub reserved: u16,
    /// The checksum found in the frame, already verified. Retained for
    /// diagnostics.
    pub checksum: u16,
}
