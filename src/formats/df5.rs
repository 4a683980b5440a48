//! Data format 5, the "RAWv2" layout.
//!
//! ```text
//! ┌─────┬──────┬──────────┬──────────┬───────────────┬────────────┬──────────┬──────────┬─────┐
//! │ Fmt │ Temp │ Humidity │ Pressure │ Accel X, Y, Z │ Power info │ Movement │ Sequence │ MAC │
//! │ 1B  │ i16  │ u16      │ u16      │ 3 × i16       │ u16        │ u8       │ u16      │ 6B  │
//! └─────┴──────┴──────────┴──────────┴───────────────┴────────────┴──────────┴──────────┴─────┘
//! ```

use tartan_bitfield::bitfield;
use zerocopy::{
    FromBytes,
    byteorder::big_endian::{I16, U16},
};

use crate::mac::MacAddress;

use super::{
    DecodeError, LEGACY_GRAVITY, STANDARD_GRAVITY, magnitude_mss, milli_g_to_mss, pressure_hpa,
    round, take,
};

/// Length of the fixed layout, including the format byte.
pub const LEN: usize = 24;

/// Format byte.
pub const TAG: u8 = 0x05;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes)]
struct Layout {
    _format: u8,
    temperature: I16,
    humidity: U16,
    pressure: U16,
    acceleration: [I16; 3],
    power: U16,
    movement_counter: u8,
    sequence: U16,
    mac: [u8; 6],
}

bitfield! {
    struct PowerInfo(u16) {
        [0..5] tx_power: u8,
        [5..16] battery: u16,
    }
}

/// A decoded data format 5 payload.
///
/// The format byte is not checked; dispatch happens in
/// [`crate::registry::Format::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat5 {
    raw: Layout,
}

impl DataFormat5 {
    /// Decode a payload of at least [`LEN`] bytes.
    pub fn new(r: &[u8]) -> Result<Self, DecodeError> {
        let raw: Layout = zerocopy::transmute!(*take::<LEN>(r)?);
        Ok(Self { raw })
    }

    /// Temperature in degrees Celsius.
    pub fn temperature_celsius(&self) -> Option<f64> {
        match self.raw.temperature.get() {
            i16::MIN => None,
            t => Some(round(f64::from(t) / 200.0, 2)),
        }
    }

    /// Relative humidity in percent.
    pub fn humidity_percentage(&self) -> Option<f64> {
        match self.raw.humidity.get() {
            u16::MAX => None,
            h => Some(round(f64::from(h) / 400.0, 2)),
        }
    }

    /// Atmospheric pressure in hectopascals.
    pub fn pressure_hpa(&self) -> Option<f64> {
        match self.raw.pressure.get() {
            u16::MAX => None,
            p => Some(pressure_hpa(p)),
        }
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

    /// Magnitude of the acceleration vector in m/s², using standard gravity.
    pub fn acceleration_total_mss(&self) -> Option<f64> {
        self.acceleration_vector_mg()
            .map(|v| round(magnitude_mss(v, STANDARD_GRAVITY), 2))
    }

    /// Battery voltage in millivolts.
    pub fn battery_voltage_mv(&self) -> Option<u16> {
        match PowerInfo(self.raw.power.get()).battery() {
            2047 => None,
            v => Some(v + 1600),
        }
    }

    /// Transmit power in dBm.
    pub fn tx_power_dbm(&self) -> Option<i8> {
        match PowerInfo(self.raw.power.get()).tx_power() {
            31 => None,
            p => Some(-40 + 2 * p as i8),
        }
    }

    /// Number of movements detected by the accelerometer, wrapping at 255.
    pub fn movement_counter(&self) -> u8 {
        self.raw.movement_counter
    }

    /// Measurement sequence number, wrapping at 65535.
    pub fn measurement_sequence_number(&self) -> u16 {
        self.raw.sequence.get()
    }

    /// MAC address of the broadcasting tag.
    pub fn mac(&self) -> MacAddress {
        MacAddress::new(self.raw.mac)
    }
}

fn axis_mss(milli_g: i16) -> f64 {
    round(milli_g_to_mss(f64::from(milli_g), LEGACY_GRAVITY), 2)
}
