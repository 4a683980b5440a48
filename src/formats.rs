//! Decoders for each supported wire format.
//!
//! Every decoder owns one fixed layout. Construction checks the payload length
//! (and, for the self-validating formats, the format byte) before any field is
//! read; accessors then convert raw fields into engineering units on demand.
//!
//! All multi-byte integers are big-endian. Bytes past a format's fixed length
//! are ignored.
//!
//! | Format | Tag    | Length | Decoder                      |
//! |--------|--------|--------|------------------------------|
//! | 3      | `0x03` | 14     | [`df3::DataFormat3`]         |
//! | 5      | `0x05` | 24     | [`df5::DataFormat5`]         |
//! | 6      | `0x06` | 20     | [`df6::DataFormat6`]         |
//! | E1     | `0xE1` | 40     | [`dfe1::DataFormatE1`]       |

use num_traits::Float;
use thiserror::Error;

pub mod df3;
pub mod df5;
pub mod df6;
pub mod dfe1;

/// An error constructing a decoder from a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is shorter than the format's fixed layout.
    #[error("Payload too short ({actual} bytes, expected at least {required}).")]
    PayloadTooShort { required: usize, actual: usize },
    /// The leading byte does not match the decoder's format.
    #[error("Unexpected format byte ({found:#04X}, expected {expected:#04X}).")]
    UnexpectedFormatTag { expected: u8, found: u8 },
}

/// Standard gravity in m/s².
pub(crate) const STANDARD_GRAVITY: f64 = 9.80665;

/// Gravity approximation used by the older conversions.
pub(crate) const LEGACY_GRAVITY: f64 = 9.8;

/// Sentinel shared by 9-bit index fields.
const NINE_BIT_INVALID: u16 = 0x1FF;

/// Take the fixed-length prefix of a payload.
pub(crate) fn take<const N: usize>(r: &[u8]) -> Result<&[u8; N], DecodeError> {
    r.first_chunk::<N>().ok_or(DecodeError::PayloadTooShort {
        required: N,
        actual: r.len(),
    })
}

/// Check the format byte of a self-validating format.
pub(crate) fn expect_tag(found: u8, expected: u8) -> Result<(), DecodeError> {
    if found != expected {
        Err(DecodeError::UnexpectedFormatTag { expected, found })?;
    }

    Ok(())
}

/// Assemble a 9-bit value from its upper eight bits and a low bit kept
/// elsewhere, if it is not the invalid marker.
pub(crate) fn nine_bit(high: u8, low: bool) -> Option<u16> {
    let x = (u16::from(high) << 1) | u16::from(low);

    if x != NINE_BIT_INVALID { Some(x) } else { None }
}

/// Read a 24-bit unsigned integer, if not all bits are set.
pub(crate) fn u24(r: [u8; 3]) -> Option<u32> {
    if r != [0xFF; 3] {
        Some(u32::from_be_bytes([0, r[0], r[1], r[2]]))
    } else {
        None
    }
}

/// Convert the offset pressure encoding used by every format to hectopascals.
pub(crate) fn pressure_hpa(raw: u16) -> f64 {
    round((f64::from(raw) + 50_000.0) / 100.0, 2)
}

/// Convert a milli-g acceleration to m/s².
pub(crate) fn milli_g_to_mss(milli_g: f64, gravity: f64) -> f64 {
    milli_g / 1000.0 * gravity
}

/// Euclidean norm of a milli-g vector, in m/s².
pub(crate) fn magnitude_mss((x, y, z): (i16, i16, i16), gravity: f64) -> f64 {
    let (x, y, z) = (f64::from(x), f64::from(y), f64::from(z));
    milli_g_to_mss(Float::sqrt(x * x + y * y + z * z), gravity)
}

/// Round to a number of decimal places, as the exact binary value would be.
///
/// Scaling can land on a tie (`26.965 * 100 == 2696.5`) that the stored value
/// is not actually on, so ties are broken by the residual of the product.
/// Exact ties round to even. Never returns negative zero.
pub(crate) fn round(x: f64, places: i32) -> f64 {
    let scale = Float::powi(10f64, places);

    let y = x * scale;
    let residual = Float::mul_add(x, scale, -y);

    let r = if Float::abs(Float::fract(y)) == 0.5 && residual != 0.0 {
        if (residual > 0.0) == (y > 0.0) {
            Float::round(y)
        } else {
            Float::trunc(y)
        }
    } else {
        round_ties_even(y)
    };

    r / scale + 0.0
}

/// Round to the nearest integer, ties to even.
pub(crate) fn round_ties_even(x: f64) -> f64 {
    let r = Float::round(x);

    if Float::abs(r - x) == 0.5 && r % 2.0 != 0.0 {
        r - Float::signum(x)
    } else {
        r
    }
}
