//! Data format E1, the extended Ruuvi Air layout for Bluetooth 5 advertisements.
//!
//! ```text
//! ┌─────┬──────┬──────────┬──────────┬─────┬───────┬─────┬──────┬─────┬─────┬─────┬──────┐
//! │ Fmt │ Temp │ Humidity │ Pressure │ PM1 │ PM2.5 │ PM4 │ PM10 │ CO2 │ VOC │ NOx │ Lumi │
//! │ 1B  │ i16  │ u16      │ u16      │ u16 │ u16   │ u16 │ u16  │ u16 │ u8  │ u8  │ u24  │
//! ├─────┴──────┴──────────┴──────────┴─────┴───────┴─────┴──────┴─────┴─────┴─────┴──────┤
//! │ Reserved 3B │ Seq u24 │ Flags 1B │ Reserved 5B │ MAC 6B                              │
//! └─────────────┴─────────┴──────────┴─────────────┴─────────────────────────────────────┘
//! ```

use tartan_bitfield::bitfield;
use zerocopy::{
    FromBytes,
    byteorder::big_endian::{I16, U16},
};

use crate::mac::MacAddress;

use super::{DecodeError, expect_tag, nine_bit, pressure_hpa, round, take, u24};

/// Length of the fixed layout, including the format byte.
pub const LEN: usize = 40;

/// Format byte.
pub const TAG: u8 = 0xE1;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes)]
struct Layout {
    format: u8,
    temperature: I16,
    humidity: U16,
    pressure: U16,
    pm1: U16,
    pm25: U16,
    pm4: U16,
    pm10: U16,
    co2: U16,
    voc: u8,
    nox: u8,
    luminosity: [u8; 3],
    _reserved: [u8; 3],
    sequence: [u8; 3],
    flags: u8,
    _reserved_2: [u8; 5],
    mac: [u8; 6],
}

bitfield! {
    struct Flags(u8) {
        [0] calibration_in_progress,
        [6] voc_lsb,
        [7] nox_lsb,
    }
}

/// A decoded data format E1 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormatE1 {
    raw: Layout,
}

impl DataFormatE1 {
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
            t => Some(round(f64::from(t) * 0.005, 3)),
        }
    }

    /// Relative humidity in percent.
    pub fn humidity_percentage(&self) -> Option<f64> {
        match self.raw.humidity.get() {
            u16::MAX => None,
            h => Some(round(f64::from(h) * 0.0025, 3)),
        }
    }

    /// Atmospheric pressure in hectopascals.
    pub fn pressure_hpa(&self) -> Option<f64> {
        match self.raw.pressure.get() {
            u16::MAX => None,
            p => Some(pressure_hpa(p)),
        }
    }

    /// PM1.0 mass concentration in µg/m³.
    pub fn pm1_ug_m3(&self) -> Option<f64> {
        particulate(self.raw.pm1)
    }

    /// PM2.5 mass concentration in µg/m³.
    pub fn pm25_ug_m3(&self) -> Option<f64> {
        particulate(self.raw.pm25)
    }

    /// PM4.0 mass concentration in µg/m³.
    pub fn pm4_ug_m3(&self) -> Option<f64> {
        particulate(self.raw.pm4)
    }

    /// PM10 mass concentration in µg/m³.
    pub fn pm10_ug_m3(&self) -> Option<f64> {
        particulate(self.raw.pm10)
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

    /// Illuminance in lux.
    pub fn luminosity_lux(&self) -> Option<f64> {
        u24(self.raw.luminosity).map(|l| round(f64::from(l) * 0.01, 2))
    }

    /// Measurement sequence number, wrapping below 2²⁴ - 1.
    pub fn measurement_sequence_number(&self) -> Option<u32> {
        u24(self.raw.sequence)
    }

    /// Whether the air quality sensors are calibrating.
    pub fn calibration_in_progress(&self) -> bool {
        self.flags().calibration_in_progress()
    }

    /// MAC address of the broadcasting device.
    pub fn mac(&self) -> MacAddress {
        MacAddress::new(self.raw.mac)
    }
}

fn particulate(raw: U16) -> Option<f64> {
    match raw.get() {
        u16::MAX => None,
        pm => Some(round(f64::from(pm) * 0.1, 1)),
    }
}
