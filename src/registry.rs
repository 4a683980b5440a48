//! Dispatch on the format byte, and the frames produced by each decoder.

use core::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    formats::{
        DecodeError,
        df3::{self, DataFormat3},
        df5::{self, DataFormat5},
        df6::{self, DataFormat6},
        dfe1::{self, DataFormatE1},
    },
    iaqs::calculate_iaqs,
    mac::MacAddress,
    reading::{Quantity, Reading, Value},
};

/// A format byte with no known decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported data format ({0:#04X}).")]
pub struct UnsupportedFormat(pub u8);

/// Errors occurring while decoding a payload of unknown format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The format byte is not supported.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedFormat),
    /// The payload does not fit its format's layout.
    #[error("Malformed payload: {0}")]
    Decode(#[from] DecodeError),
}

/// A supported wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Format {
    /// Data format 3 ("RAWv1").
    Df3,
    /// Data format 5 ("RAWv2").
    Df5,
    /// Data format 6 (Ruuvi Air, Bluetooth 4).
    Df6,
    /// Data format E1 (Ruuvi Air, extended).
    DfE1,
}

impl Format {
    /// Find the format identified by a leading format byte.
    pub fn resolve(tag: u8) -> Result<Self, UnsupportedFormat> {
        match tag {
            df3::TAG => Ok(Self::Df3),
            df5::TAG => Ok(Self::Df5),
            df6::TAG => Ok(Self::Df6),
            dfe1::TAG => Ok(Self::DfE1),
            _ => Err(UnsupportedFormat(tag)),
        }
    }

    /// The leading format byte.
    pub fn tag(self) -> u8 {
        match self {
            Self::Df3 => df3::TAG,
            Self::Df5 => df5::TAG,
            Self::Df6 => df6::TAG,
            Self::DfE1 => dfe1::TAG,
        }
    }

    /// The minimum payload length, including the format byte.
    pub fn min_len(self) -> usize {
        match self {
            Self::Df3 => df3::LEN,
            Self::Df5 => df5::LEN,
            Self::Df6 => df6::LEN,
            Self::DfE1 => dfe1::LEN,
        }
    }

    /// The quantities published by frames of this format.
    pub fn quantities(self) -> &'static [Quantity] {
        use Quantity::*;

        match self {
            Self::Df3 => &[
                Temperature,
                Humidity,
                Pressure,
                AccelerationX,
                AccelerationY,
                AccelerationZ,
                AccelerationTotal,
                BatteryVoltage,
            ],
            Self::Df5 => &[
                Temperature,
                Humidity,
                Pressure,
                AccelerationX,
                AccelerationY,
                AccelerationZ,
                AccelerationTotal,
                BatteryVoltage,
                TxPower,
                MovementCounter,
                SequenceNumber,
            ],
            Self::Df6 => &[
                Temperature,
                Humidity,
                Pressure,
                Pm25,
                Co2,
                VocIndex,
                NoxIndex,
                Luminosity,
                SoundAverage,
                SequenceNumber,
                AirQualityScore,
                CalibrationInProgress,
            ],
            Self::DfE1 => &[
                Temperature,
                Humidity,
                Pressure,
                Pm1,
                Pm25,
                Pm4,
                Pm10,
                Co2,
                VocIndex,
                NoxIndex,
                Luminosity,
                SequenceNumber,
                AirQualityScore,
                CalibrationInProgress,
            ],
        }
    }

    /// Decode a payload with this format's decoder.
    pub fn decode(self, r: &[u8]) -> Result<Frame, DecodeError> {
        Ok(match self {
            Self::Df3 => Frame::Df3(DataFormat3::new(r)?),
            Self::Df5 => Frame::Df5(DataFormat5::new(r)?),
            Self::Df6 => Frame::Df6(DataFormat6::new(r)?),
            Self::DfE1 => Frame::DfE1(DataFormatE1::new(r)?),
        })
    }
}

impl TryFrom<u8> for Format {
    type Error = UnsupportedFormat;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::resolve(tag)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Df3 => "data format 3",
            Self::Df5 => "data format 5",
            Self::Df6 => "data format 6",
            Self::DfE1 => "data format E1",
        })
    }
}

/// A decoded payload of any supported format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Df3(DataFormat3),
    Df5(DataFormat5),
    Df6(DataFormat6),
    DfE1(DataFormatE1),
}

impl Frame {
    /// The format this frame was decoded from.
    pub fn format(&self) -> Format {
        match self {
            Self::Df3(_) => Format::Df3,
            Self::Df5(_) => Format::Df5,
            Self::Df6(_) => Format::Df6,
            Self::DfE1(_) => Format::DfE1,
        }
    }

    /// The MAC address broadcast in the payload, if the format carries one.
    pub fn mac(&self) -> Option<MacAddress> {
        match self {
            Self::Df3(_) => None,
            Self::Df5(f) => Some(f.mac()),
            Self::Df6(f) => Some(f.mac()),
            Self::DfE1(f) => Some(f.mac()),
        }
    }

    /// The indoor air quality score, for formats carrying CO2 and PM2.5.
    pub fn air_quality_score(&self) -> Option<u8> {
        match self {
            Self::Df6(f) => calculate_iaqs(f.co2_ppm(), f.pm25_ug_m3()),
            Self::DfE1(f) => calculate_iaqs(f.co2_ppm(), f.pm25_ug_m3()),
            Self::Df3(_) | Self::Df5(_) => None,
        }
    }

    /// The value of a quantity.
    ///
    /// Returns `None` both for invalid fields and for quantities this format
    /// does not carry; see [`Format::quantities`] to tell these apart.
    pub fn value(&self, quantity: Quantity) -> Option<Value> {
        use Quantity as Q;

        fn v<T: Into<Value>>(x: Option<T>) -> Option<Value> {
            x.map(Into::into)
        }

        if quantity == Q::AirQualityScore {
            return v(self.air_quality_score());
        }

        match self {
            Self::Df3(f) => match quantity {
                Q::Temperature => v(f.temperature_celsius()),
                Q::Humidity => v(f.humidity_percentage()),
                Q::Pressure => v(Some(f.pressure_hpa())),
                Q::AccelerationX => v(f.acceleration_x_mss()),
                Q::AccelerationY => v(f.acceleration_y_mss()),
                Q::AccelerationZ => v(f.acceleration_z_mss()),
                Q::AccelerationTotal => v(f.acceleration_total_mss()),
                Q::BatteryVoltage => v(Some(f.battery_voltage_mv())),
                _ => None,
            },
            Self::Df5(f) => match quantity {
                Q::Temperature => v(f.temperature_celsius()),
                Q::Humidity => v(f.humidity_percentage()),
                Q::Pressure => v(f.pressure_hpa()),
                Q::AccelerationX => v(f.acceleration_x_mss()),
                Q::AccelerationY => v(f.acceleration_y_mss()),
                Q::AccelerationZ => v(f.acceleration_z_mss()),
                Q::AccelerationTotal => v(f.acceleration_total_mss()),
                Q::BatteryVoltage => v(f.battery_voltage_mv()),
                Q::TxPower => v(f.tx_power_dbm()),
                Q::MovementCounter => v(Some(f.movement_counter())),
                Q::SequenceNumber => v(Some(f.measurement_sequence_number())),
                _ => None,
            },
            Self::Df6(f) => match quantity {
                Q::Temperature => v(f.temperature_celsius()),
                Q::Humidity => v(f.humidity_percentage()),
                Q::Pressure => v(f.pressure_hpa()),
                Q::Pm25 => v(f.pm25_ug_m3()),
                Q::Co2 => v(f.co2_ppm()),
                Q::VocIndex => v(f.voc_index()),
                Q::NoxIndex => v(f.nox_index()),
                Q::Luminosity => v(f.luminosity_lux()),
                Q::SoundAverage => v(f.sound_avg_dba()),
                Q::SequenceNumber => v(Some(f.measurement_sequence_number())),
                Q::CalibrationInProgress => v(Some(f.calibration_in_progress())),
                _ => None,
            },
            Self::DfE1(f) => match quantity {
                Q::Temperature => v(f.temperature_celsius()),
                Q::Humidity => v(f.humidity_percentage()),
                Q::Pressure => v(f.pressure_hpa()),
                Q::Pm1 => v(f.pm1_ug_m3()),
                Q::Pm25 => v(f.pm25_ug_m3()),
                Q::Pm4 => v(f.pm4_ug_m3()),
                Q::Pm10 => v(f.pm10_ug_m3()),
                Q::Co2 => v(f.co2_ppm()),
                Q::VocIndex => v(f.voc_index()),
                Q::NoxIndex => v(f.nox_index()),
                Q::Luminosity => v(f.luminosity_lux()),
                Q::SequenceNumber => v(f.measurement_sequence_number()),
                Q::CalibrationInProgress => v(Some(f.calibration_in_progress())),
                _ => None,
            },
        }
    }

    /// One reading per quantity this frame's format carries, in a fixed order.
    pub fn readings(&self) -> impl Iterator<Item = Reading> + '_ {
        self.format()
            .quantities()
            .iter()
            .map(|&quantity| Reading {
                quantity,
                value: self.value(quantity),
            })
    }
}

/// Decode a payload, choosing a decoder by its leading format byte.
pub fn decode(r: &[u8]) -> Result<Frame, Error> {
    let &tag = r.first().ok_or(DecodeError::PayloadTooShort {
        required: 1,
        actual: 0,
    })?;

    let format = Format::resolve(tag).inspect_err(|e| debug!(%e, "skipping payload"))?;

    let frame = format
        .decode(r)
        .inspect_err(|e| debug!(%format, %e, "rejected payload"))?;

    trace!(%format, len = r.len(), "decoded payload");

    Ok(frame)
}
