//! MAC addresses broadcast inside payloads.

use core::fmt;

/// A full or partial MAC address, most significant byte first.
///
/// Formats as uppercase, colon-separated hexadecimal (`CB:B8:33:4C:88:4F`).
/// Some formats only carry the lower three bytes; these are kept as-is rather
/// than padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress {
    bytes: [u8; 6],
    len: u8,
}

impl MacAddress {
    /// A full six-byte address.
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes, len: 6 }
    }

    /// The lower three bytes of an address.
    pub fn partial(bytes: [u8; 3]) -> Self {
        let [a, b, c] = bytes;
        Self {
            bytes: [a, b, c, 0, 0, 0],
            len: 3,
        }
    }

    /// The address bytes carried by the payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Whether only the lower part of the address is known.
    pub fn is_partial(&self) -> bool {
        self.len < 6
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{b:02X}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddress {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}
