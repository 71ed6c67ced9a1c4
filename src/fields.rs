//! Structured field representation of a UUID.

use crate::{Error, Uuid};
use std::{fmt, str};

/// The RFC 4122 field decomposition of a UUID.
///
/// All fields are public plain values; the record carries no invariant of its own. After any
/// generation, though, the top four bits of `time_hi` hold the version number and the top two
/// bits of `clock_seq_hi` hold the variant marker `10`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::Fields;
///
/// let fields = Fields {
///     time_low: 0x12345678,
///     time_mid: 0x9abc,
///     time_hi: 0x1def,
///     clock_seq_hi: 0x80,
///     clock_seq_low: 0x42,
///     node: [1, 2, 3, 4, 5, 6],
/// };
/// assert_eq!(fields.to_string(), "12345678-9abc-1def-8042-010203040506");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Fields {
    /// The low field of the timestamp (32 bits).
    pub time_low: u32,

    /// The middle field of the timestamp (16 bits).
    pub time_mid: u16,

    /// The high field of the timestamp with the version number in the top four bits (16 bits).
    pub time_hi: u16,

    /// The high field of the clock sequence with the variant marker in the top two bits (8 bits).
    pub clock_seq_hi: u8,

    /// The low field of the clock sequence (8 bits).
    pub clock_seq_low: u8,

    /// The spatially unique node identifier (48 bits).
    pub node: [u8; 6],
}

impl Fields {
    /// Packs the fields into the 16-byte big-endian array layout.
    pub const fn to_bytes(self) -> [u8; 16] {
        [
            (self.time_low >> 24) as u8,
            (self.time_low >> 16) as u8,
            (self.time_low >> 8) as u8,
            self.time_low as u8,
            (self.time_mid >> 8) as u8,
            self.time_mid as u8,
            (self.time_hi >> 8) as u8,
            self.time_hi as u8,
            self.clock_seq_hi,
            self.clock_seq_low,
            self.node[0],
            self.node[1],
            self.node[2],
            self.node[3],
            self.node[4],
            self.node[5],
        ]
    }

    /// Assembles the fields from the 16-byte big-endian array layout.
    pub const fn from_bytes(src: [u8; 16]) -> Self {
        Self {
            time_low: u32::from_be_bytes([src[0], src[1], src[2], src[3]]),
            time_mid: u16::from_be_bytes([src[4], src[5]]),
            time_hi: u16::from_be_bytes([src[6], src[7]]),
            clock_seq_hi: src[8],
            clock_seq_low: src[9],
            node: [src[10], src[11], src[12], src[13], src[14], src[15]],
        }
    }

    /// Returns the version number stored in the top four bits of `time_hi`.
    pub const fn version(&self) -> u8 {
        (self.time_hi >> 12) as u8
    }
}

impl From<Fields> for Uuid {
    fn from(src: Fields) -> Self {
        Self::from(src.to_bytes())
    }
}

impl From<Uuid> for Fields {
    fn from(src: Uuid) -> Self {
        Self::from_bytes(*src.as_bytes())
    }
}

impl fmt::Display for Fields {
    /// Formats the fields as the 8-4-4-4-12 canonical hexadecimal string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.time_low,
            self.time_mid,
            self.time_hi,
            self.clock_seq_hi,
            self.clock_seq_low,
            self.node[0],
            self.node[1],
            self.node[2],
            self.node[3],
            self.node[4],
            self.node[5],
        )
    }
}

impl str::FromStr for Fields {
    type Err = Error;

    /// Parses the 8-4-4-4-12 canonical hexadecimal string into fields, failing with
    /// [`Error::MalformedInput`] on anything else.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        src.parse::<Uuid>().map(Self::from)
    }
}
