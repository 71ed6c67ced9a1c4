//! Version and format dispatch entry points

use crate::{name, v1, v4, Error, Fields, Namespace};

/// The UUID generation schemes this library implements.
///
/// The discriminants are the RFC 4122 version numbers; [`TryFrom<u8>`] maps a raw number back
/// to the scheme and reports [`Error::UnsupportedVersion`] for anything else.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Version {
    /// Time-based UUID (version 1)
    Time = 1,

    /// Name-based UUID hashed with MD5 (version 3)
    NameMd5 = 3,

    /// Randomly generated UUID (version 4)
    Random = 4,

    /// Name-based UUID hashed with SHA-1 (version 5)
    NameSha1 = 5,
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            1 => Ok(Self::Time),
            3 => Ok(Self::NameMd5),
            4 => Ok(Self::Random),
            5 => Ok(Self::NameSha1),
            n => Err(Error::UnsupportedVersion(n)),
        }
    }
}

/// The UUID representations this library converts between.
///
/// [`TryFrom<u8>`] maps a raw representation code back to the selector and reports
/// [`Error::UnsupportedFormat`] for anything else, including the legacy word-size codes that
/// were never implemented.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Format {
    /// The structured field record
    Fields = 100,

    /// The canonical 8-4-4-4-12 hexadecimal string
    Text = 101,

    /// The 16-byte big-endian array
    Bytes = 102,
}

impl TryFrom<u8> for Format {
    type Error = Error;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            100 => Ok(Self::Fields),
            101 => Ok(Self::Text),
            102 => Ok(Self::Bytes),
            n => Err(Error::UnsupportedFormat(n)),
        }
    }
}

/// A UUID held in one of the supported representations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    /// The structured field record
    Fields(Fields),

    /// The canonical 8-4-4-4-12 hexadecimal string
    Text(String),

    /// The 16-byte big-endian array
    Bytes([u8; 16]),
}

impl Value {
    /// Reports the representation this value is held in.
    pub const fn format(&self) -> Format {
        match self {
            Self::Fields(_) => Format::Fields,
            Self::Text(_) => Format::Text,
            Self::Bytes(_) => Format::Bytes,
        }
    }

    /// Routes the value to the hub field-record representation.
    fn into_fields(self) -> Result<Fields, Error> {
        match self {
            Self::Fields(src) => Ok(src),
            Self::Text(src) => src.parse(),
            Self::Bytes(src) => Ok(Fields::from_bytes(src)),
        }
    }
}

/// Generates a UUID of `version` in the representation selected by `format`.
///
/// `node` carries the node identifier for [`Version::Time`] and the raw name bytes for the
/// name-based versions; [`Version::Random`] ignores it. `namespace` is consulted only by the
/// name-based versions, which fail with [`Error::MalformedInput`] when it is absent or does not
/// parse.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{generate, Format, Namespace, Value, Version};
///
/// let ns = Namespace::Text("6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// let md5 = generate(
///     Version::NameMd5,
///     Format::Text,
///     b"www.widgets.com",
///     Some(&ns),
/// )?;
/// assert_eq!(
///     md5,
///     Value::Text("e902893a-9d22-3c7e-a7b8-d6e313b71d9f".to_owned())
/// );
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn generate(
    version: Version,
    format: Format,
    node: &[u8],
    namespace: Option<&Namespace>,
) -> Result<Value, Error> {
    let fields = match version {
        Version::Time => v1::fields_v1(node),
        Version::Random => v4::fields_v4(),
        Version::NameMd5 => name::fields_v3(namespace.ok_or(Error::MalformedInput)?, node)?,
        Version::NameSha1 => name::fields_v5(namespace.ok_or(Error::MalformedInput)?, node)?,
    };
    convert(Value::Fields(fields), format)
}

/// Converts a UUID value to the representation selected by `to`.
///
/// A value already held in the requested representation is passed through untouched, without
/// validation. Any other conversion routes through the field record; converting from a
/// malformed text value fails with [`Error::MalformedInput`].
///
/// # Examples
///
/// ```rust
/// use uuid4122::{convert, Format, Value};
///
/// let text = Value::Text("12345678-9abc-1def-8042-010203040506".to_owned());
/// let bytes = convert(text, Format::Bytes)?;
/// assert_eq!(
///     bytes,
///     Value::Bytes([
///         0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0x1d, 0xef, 0x80, 0x42, 0x01, 0x02, 0x03, 0x04,
///         0x05, 0x06,
///     ])
/// );
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn convert(value: Value, to: Format) -> Result<Value, Error> {
    if value.format() == to {
        return Ok(value);
    }

    let fields = value.into_fields()?;
    Ok(match to {
        Format::Fields => Value::Fields(fields),
        Format::Text => Value::Text(fields.to_string()),
        Format::Bytes => Value::Bytes(fields.to_bytes()),
    })
}
