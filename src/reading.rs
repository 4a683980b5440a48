//! The `(key, quantity, unit, value)` set handed to sensor registries.
//!
//! A [`Frame`](crate::Frame) publishes one [`Reading`] per quantity its format
//! carries, absent values included, so a consumer can tell "not measured by
//! this device" apart from "measured, but invalid right now".

use core::fmt;

/// A physical quantity (or counter) a format may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
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
    Pm1,
    Pm25,
    Pm4,
    Pm10,
    Co2,
    VocIndex,
    NoxIndex,
    Luminosity,
    SoundAverage,
    AirQualityScore,
    CalibrationInProgress,
}

impl Quantity {
    /// A stable, snake-case key for this quantity.
    pub fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Pressure => "pressure",
            Self::AccelerationX => "acceleration_x",
            Self::AccelerationY => "acceleration_y",
            Self::AccelerationZ => "acceleration_z",
            Self::AccelerationTotal => "acceleration_total",
            Self::BatteryVoltage => "voltage",
            Self::TxPower => "signal_strength",
            Self::MovementCounter => "movement_counter",
            Self::SequenceNumber => "measurement_sequence_number",
            Self::Pm1 => "pm1",
            Self::Pm25 => "pm25",
            Self::Pm4 => "pm4",
            Self::Pm10 => "pm10",
            Self::Co2 => "carbon_dioxide",
            Self::VocIndex => "voc_index",
            Self::NoxIndex => "nox_index",
            Self::Luminosity => "illuminance",
            Self::SoundAverage => "sound_pressure",
            Self::AirQualityScore => "iaqs",
            Self::CalibrationInProgress => "calibration_in_progress",
        }
    }

    /// Look up a quantity by its [`key`](Self::key).
    pub fn from_key(key: &str) -> Option<Self> {
        ALL.iter().copied().find(|q| q.key() == key)
    }

    /// The unit values of this quantity are expressed in, if any.
    pub fn unit(self) -> Option<Unit> {
        Some(match self {
            Self::Temperature => Unit::Celsius,
            Self::Humidity => Unit::Percentage,
            Self::Pressure => Unit::Hectopascal,
            Self::AccelerationX
            | Self::AccelerationY
            | Self::AccelerationZ
            | Self::AccelerationTotal => Unit::MetersPerSecondSquared,
            Self::BatteryVoltage => Unit::Millivolt,
            Self::TxPower => Unit::DecibelMilliwatt,
            Self::Pm1 | Self::Pm25 | Self::Pm4 | Self::Pm10 => Unit::MicrogramsPerCubicMeter,
            Self::Co2 => Unit::PartsPerMillion,
            Self::Luminosity => Unit::Lux,
            Self::SoundAverage => Unit::DecibelA,
            Self::MovementCounter
            | Self::SequenceNumber
            | Self::VocIndex
            | Self::NoxIndex
            | Self::AirQualityScore
            | Self::CalibrationInProgress => return None,
        })
    }
}

const ALL: [Quantity; 22] = [
    Quantity::Temperature,
    Quantity::Humidity,
    Quantity::Pressure,
    Quantity::AccelerationX,
    Quantity::AccelerationY,
    Quantity::AccelerationZ,
    Quantity::AccelerationTotal,
    Quantity::BatteryVoltage,
    Quantity::TxPower,
    Quantity::MovementCounter,
    Quantity::SequenceNumber,
    Quantity::Pm1,
    Quantity::Pm25,
    Quantity::Pm4,
    Quantity::Pm10,
    Quantity::Co2,
    Quantity::VocIndex,
    Quantity::NoxIndex,
    Quantity::Luminosity,
    Quantity::SoundAverage,
    Quantity::AirQualityScore,
    Quantity::CalibrationInProgress,
];

/// A unit of measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Celsius,
    Percentage,
    Hectopascal,
    MetersPerSecondSquared,
    Millivolt,
    DecibelMilliwatt,
    MicrogramsPerCubicMeter,
    PartsPerMillion,
    Lux,
    DecibelA,
}

impl Unit {
    /// The conventional symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Percentage => "%",
            Self::Hectopascal => "hPa",
            Self::MetersPerSecondSquared => "m/s²",
            Self::Millivolt => "mV",
            Self::DecibelMilliwatt => "dBm",
            Self::MicrogramsPerCubicMeter => "µg/m³",
            Self::PartsPerMillion => "ppm",
            Self::Lux => "lx",
            Self::DecibelA => "dBA",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.key())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.symbol())
    }
}

/// A present measurement value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl Value {
    /// The value as a float, if numeric.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(i as f64),
            Self::Float(x) => Some(x),
            Self::Flag(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! value_from {
    ($variant:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(x: $t) -> Self {
                    Self::$variant(x.into())
                }
            }
        )*
    };
}

value_from!(Integer: u8, i8, u16, u32);
value_from!(Float: f64);
value_from!(Flag: bool);

/// One quantity published by a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub quantity: Quantity,
    /// `None` if the payload marked this field invalid.
    pub value: Option<Value>,
}

impl Reading {
    /// Shorthand for [`Quantity::key`].
    pub fn key(&self) -> &'static str {
        self.quantity.key()
    }

    /// Shorthand for [`Quantity::unit`].
    pub fn unit(&self) -> Option<Unit> {
        self.quantity.unit()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reading {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut r = s.serialize_struct("Reading", 3)?;
        r.serialize_field("key", &self.quantity)?;
        r.serialize_field("unit", &self.unit())?;
        r.serialize_field("value", &self.value)?;
        r.end()
    }
}
