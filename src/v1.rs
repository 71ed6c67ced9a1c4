//! Time-based (version 1) UUID generation

use crate::{Fields, Uuid};
use rand::random;
use std::time::{SystemTime, UNIX_EPOCH};

/// Offset between the Unix epoch and the Gregorian epoch (1582-10-15) in 100-nanosecond units.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Generates a UUIDv1 object from the system clock and the caller-supplied node identifier.
///
/// `node` should carry the 48-bit IEEE node identifier, conventionally a MAC address; this
/// library leaves it to the caller to supply one. Only the first six bytes are used, and missing
/// positions read as zero. The clock sequence is drawn fresh from the random number generator on
/// every call; no generator state is kept across calls or process restarts.
///
/// # Examples
///
/// ```rust
/// use uuid4122::uuid1;
///
/// let uuid = uuid1(&[0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
/// println!("{}", uuid); // e.g. "8c28dd92-e4d0-11ee-8e17-00c04fd430c8"
/// ```
pub fn uuid1(node: &[u8]) -> Uuid {
    Uuid::from(fields_v1(node))
}

/// Generates the field record of a new version 1 UUID.
pub(crate) fn fields_v1(node: &[u8]) -> Fields {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards");
    let timestamp =
        now.as_secs() * 10_000_000 + u64::from(now.subsec_micros()) * 10 + GREGORIAN_OFFSET;
    from_timestamp(timestamp, node)
}

/// Assembles the version 1 field record from a 60-bit Gregorian timestamp, a fresh random clock
/// sequence, and the node bytes.
fn from_timestamp(timestamp: u64, node: &[u8]) -> Fields {
    let clock_seq: u16 = random();

    let mut fields = Fields {
        time_low: timestamp as u32,
        time_mid: (timestamp >> 32) as u16,
        time_hi: ((timestamp >> 48) as u16 & 0x0fff) | (1 << 12),
        clock_seq_hi: 0x80 | ((clock_seq >> 8) as u8 & 0x3f),
        clock_seq_low: clock_seq as u8,
        node: [0; 6],
    };
    for (dst, src) in fields.node.iter_mut().zip(node) {
        *dst = *src;
    }
    fields
}
