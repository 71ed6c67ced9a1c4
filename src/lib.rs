//! An implementation of RFC 4122 UUID generation and representation conversion
//!
//! This library generates UUIDs of versions 1 (time-based), 3 (name-based, MD5), 4 (random),
//! and 5 (name-based, SHA-1), and converts losslessly between the three representations of a
//! UUID: the structured field record, the 16-byte big-endian array, and the canonical
//! hyphenated string.
//!
//! ```rust
//! use uuid4122::uuid4;
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! # Field and bit layout
//!
//! The byte-array representation lays out the fields of [`Fields`] big-endian:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |    time_hi            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var| clock_seq_hi  | clock_seq_low |            node           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The 4-bit `ver` field identifies the generation scheme and the 2-bit `var` field is set at
//! `10` for every UUID this library produces.
//!
//! # Generators
//!
//! Each version has a direct entry point:
//!
//! ```rust
//! use uuid4122::{uuid1, uuid3, uuid5, Namespace, Uuid};
//!
//! let time_based = uuid1(&[0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
//!
//! let ns = Namespace::Bytes(Uuid::NAMESPACE_DNS.as_bytes());
//! let md5 = uuid3(&ns, b"www.widgets.com")?;
//! let sha1 = uuid5(&ns, b"www.widgets.com")?;
//! assert_eq!(md5.to_string(), "e902893a-9d22-3c7e-a7b8-d6e313b71d9f");
//! # Ok::<(), uuid4122::Error>(())
//! ```
//!
//! The name-based generators are deterministic, so they suit idempotent identification; the
//! time-based generator draws a fresh random clock sequence on every call rather than keeping
//! state across process restarts.
//!
//! # Dispatch by version and format
//!
//! [`generate`] and [`convert`] select the generator and target representation by enum value,
//! for callers that decide both at run time:
//!
//! ```rust
//! use uuid4122::{convert, generate, Format, Value, Version};
//!
//! let uuid = generate(Version::Random, Format::Text, b"", None)?;
//! let bytes = convert(uuid, Format::Bytes)?;
//! # Ok::<(), uuid4122::Error>(())
//! ```

mod entry;
mod fields;
mod id;
mod name;
mod v1;
mod v4;

pub use entry::{convert, generate, Format, Value, Version};
pub use fields::Fields;
pub use id::{Error, Uuid, Variant};
pub use name::{uuid3, uuid5, Namespace};
pub use v1::uuid1;
pub use v4::uuid4;
