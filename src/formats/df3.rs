//! Data format 3, the legacy "RAWv1" layout.
//!
//! ```text
//! ┌─────┬──────────┬─────────────┬──────────┬────────────────┬─────────┐
//! │ Fmt │ Humidity │ Temperature │ Pressure │ Accel X, Y, Z  │ Battery │
//! │ 1B  │ u8       │ 2B          │ u16      │ 3 × i16        │ u16     │
//! └─────┴──────────┴─────────────┴──────────┴────────────────┴─────────┘
//! ```

use tartan_bitfield::bitfield;
use zerocopy::{
    FromBytes,
    byteorder::big_endian::{I16, U16},
};

use super::{
    DecodeError, LEGACY_GRAVITY, STANDARD_GRAVITY, magnitude_mss, milli_g_to_mss, pressure_hpa,
    round, take,
};

/// Length of the fixed layout, including the format byte.
pub const LEN: usize = 14;

/// Format byte.
pub const TAG: u8 = 0x03;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes)]
struct Layout {
    _format: u8,
    humidity: u8,
    temperature: u8,
    temperature_fraction: u8,
    pressure: U16,
    acceleration: [I16; 3],
    battery: U16,
}

bitfield! {
    struct SignMagnitude(u8) {
        [0..7] whole: u8,
        [7] is_negative,
    }
}

/// A decoded data format 3 payload.
///
/// The format byte is not checked; dispatch happens in
/// [`crate::registry::Format::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat3 {
    raw: Layout,
}

impl DataFormat3 {
    /// Decode a payload of at least [`LEN`] bytes.
    pub fn new(r: &[u8]) -> Result<Self, DecodeError> {
        let raw: Layout = zerocopy::transmute!(*take::<LEN>(r)?);
        Ok(Self { raw })
    }

    /// Relative humidity in percent, absent above 100%.
    pub fn humidity_percentage(&self) -> Option<f64> {
        let h = self.raw.humidity;

        if h <= 200 {
            Some(round(f64::from(h) / 2.0, 2))
        } else {
            None
        }
    }

    /// Temperature in degrees Celsius.
    ///
    /// Absent when the hundredths byte is out of range.
    pub fn temperature_celsius(&self) -> Option<f64> {
        let fraction = self.raw.temperature_fraction;
        if fraction > 99 {
            return None;
        }

        let t = SignMagnitude(self.raw.temperature);
        let value = f64::from(t.whole()) + f64::from(fraction) / 100.0;

        Some(round(if t.is_negative() { -value } else { value }, 2))
    }

    /// Atmospheric pressure in hectopascals.
    ///
    /// This format reserves no invalid marker for pressure.
    pub fn pressure_hpa(&self) -> f64 {
        pressure_hpa(self.raw.pressure.get())
    }

    /// Acceleration in milli-g, present only if every axis is.
    pub fn acceleration_vector_mg(&self) -> Option<(i16, i16, i16)> {
        let [x, y, z] = self.raw.acceleration.map(|a| a.get());

        if [x, y, z].contains(&i16::MIN) {
            None
        } else {
            Some((x, y, z))
        }
    }

    /// Acceleration along the X axis in m/s².
    pub fn acceleration_x_mss(&self) -> Option<f64> {
        self.acceleration_vector_mg().map(|(x, _, _)| axis_mss(x))
    }

    /// Acceleration along the Y axis in m/s².
    pub fn acceleration_y_mss(&self) -> Option<f64> {
        self.acceleration_vector_mg().map(|(_, y, _)| axis_mss(y))
    }

    /// Acceleration along the Z axis in m/s².
    pub fn acceleration_z_mss(&self) -> Option<f64> {
        self.acceleration_vector_mg().map(|(_, _, z)| axis_mss(z))
    }

    /// Magnitude of the acceleration vector in m/s².
    ///
    /// Converted with g = 9.8, unlike the per-axis values.
    pub fn acceleration_total_mss(&self) -> Option<f64> {
        self.acceleration_vector_mg()
            .map(|v| round(magnitude_mss(v, LEGACY_GRAVITY), 2))
    }

    /// Battery voltage in millivolts.
    pub fn battery_voltage_mv(&self) -> u16 {
        self.raw.battery.get()
    }
}

fn axis_mss(milli_g: i16) -> f64 {
    round(milli_g_to_mss(f64::from(milli_g), STANDARD_GRAVITY), 2)
}
