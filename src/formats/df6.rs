//! Data format 6, the compact Ruuvi Air layout for Bluetooth 4 advertisements.
//!
//! ```text
//! ┌─────┬──────┬──────────┬──────────┬───────┬─────┬─────┬─────┬──────┬───────┬─────┬───────┬─────┐
//! │ Fmt │ Temp │ Humidity │ Pressure │ PM2.5 │ CO2 │ VOC │ NOx │ Lumi │ Sound │ Seq │ Flags │ MAC │
//! │ 1B  │ i16  │ u16      │ u16      │ u16   │ u16 │ u8  │ u8  │ u8   │ u8    │ u8  │ u8    │ 3B  │
//! └─────┴──────┴──────────┴──────────┴───────┴─────┴─────┴─────┴──────┴───────┴─────┴───────┴─────┘
//! ```
//!
//! The VOC, NOx and sound fields are 9 bits wide; their least significant
//! bits live in the flags byte.

use num_traits::Float;
use tartan_bitfield::bitfield;
use zerocopy::{
    FromBytes,
    byteorder::big_endian::{I16, U16},
};

use crate::mac::MacAddress;

use super::{DecodeError, expect_tag, nine_bit, pressure_hpa, round, round_ties_even, take};

/// Length of the fixed layout, including the format byte.
pub const LEN: usize = 20;

/// Format byte.
pub const TAG: u8 = 0x06;

/// Scale of the logarithmic luminosity encoding.
const LUX_LOG_SCALE: f64 = 16.0 * core::f64::consts::LN_2 / 254.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes)]
struct Layout {
    format: u8,
    temperature: I16,
    humidity: U16,
    pressure: U16,
    pm25: U16,
    co2: U16,
    voc: u8,
    nox: u8,
    luminosity: u8,
    sound: u8,
    sequence: u8,
    flags: u8,
    mac: [u8; 3],
}

bitfield! {
    struct Flags(u8) {
        [0] calibration_in_progress,
        [4] sound_lsb,
        [6] voc_lsb,
        [7] nox_lsb,
    }
}

/// A decoded data format 6 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat6 {
    raw: Layout,
}

impl DataFormat6 {
    /// Decode a payload of at least [`LEN`] bytes beginning with [`TAG`].
    pub fn new(r: &[u8]) -> Result<Self, DecodeError> {
        let raw: Layout = zerocopy::transmute!(*take::<LEN>(r)?);
        expect_tag(raw.format, TAG)?;

        Ok(Self { raw })
    }

    fn flags(&self) -> Flags {
        Flags(self.raw.flags)
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

    /// PM2.5 mass concentration in µg/m³.
    pub fn pm25_ug_m3(&self) -> Option<f64> {
        match self.raw.pm25.get() {
            u16::MAX => None,
            pm => Some(round(f64::from(pm) / 10.0, 2)),
        }
    }

    /// Carbon dioxide concentration in ppm.
    pub fn co2_ppm(&self) -> Option<u16> {
        match self.raw.co2.get() {
            u16::MAX => None,
            co2 => Some(co2),
        }
    }

    /// Volatile organic compound index.
    pub fn voc_index(&self) -> Option<u16> {
        nine_bit(self.raw.voc, self.flags().voc_lsb())
    }

    /// Nitrogen oxide index.
    pub fn nox_index(&self) -> Option<u16> {
        nine_bit(self.raw.nox, self.flags().nox_lsb())
    }

    /// Illuminance in lux, decoded from its logarithmic encoding.
    pub fn luminosity_lux(&self) -> Option<u32> {
        match self.raw.luminosity {
            0xFF => None,
            0 => Some(0),
            l => {
                let lux = Float::exp(f64::from(l) * LUX_LOG_SCALE) - 1.0;
                Some(round_ties_even(lux) as u32)
            }
        }
    }

    /// Average sound level in dBA.
    pub fn sound_avg_dba(&self) -> Option<f64> {
        nine_bit(self.raw.sound, self.flags().sound_lsb())
            .map(|s| round(f64::from(s) / 5.0 + 18.0, 2))
    }

    /// Measurement sequence number, wrapping at 255.
    pub fn measurement_sequence_number(&self) -> u8 {
        self.raw.sequence
    }

    /// Whether the air quality sensors are calibrating.
    pub fn calibration_in_progress(&self) -> bool {
        self.flags().calibration_in_progress()
    }

    /// The lower three bytes of the broadcasting tag's MAC address.
    pub fn mac(&self) -> MacAddress {
        MacAddress::partial(self.raw.mac)
    }
}
