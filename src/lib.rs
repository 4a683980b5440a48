#![no_std]

//! A decoder for the manufacturer-specific payloads broadcast by RuuviTag and
//! Ruuvi Air environmental sensors.
//!
//! Each payload begins with a format byte selecting one of four fixed binary
//! layouts. Decoding is a pure transform from those bytes into typed physical
//! measurements; no scanning, I/O, or device management happens here.
//!
//! Most users should begin with [`decode`], which dispatches on the format
//! byte and returns a [`Frame`]. Individual decoders are available in the
//! [`formats`] module for callers that already know which layout to expect.
//!
//! ```
//! let frame = ruuvitag_ble::decode(&payload)?;
//!
//! for reading in frame.readings() {
//!     println!("{}: {:?}", reading.quantity.key(), reading.value);
//! }
//! ```
//!
//! Every measurement is an [`Option`]: a field holding its format's 'invalid'
//! marker value decodes to [`None`] rather than an error. Only structural
//! problems (a payload that is too short, or carries the wrong format byte)
//! are reported as errors.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `serde`: derive `Serialize` for readings and their parts.
//! - `std`: use the platform math library, and let `tracing` dispatch to
//!   scoped subscribers (default). Without it, math falls back to `libm`.

pub mod formats;
pub mod iaqs;
pub mod mac;
pub mod reading;
pub mod registry;

pub use formats::DecodeError;
pub use iaqs::calculate_iaqs;
pub use mac::MacAddress;
pub use reading::{Quantity, Reading, Unit, Value};
pub use registry::{Error, Format, Frame, UnsupportedFormat, decode};
