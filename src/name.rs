//! Name-based (version 3 and 5) UUID generation

use crate::{Error, Fields, Uuid};
use md5::{Digest, Md5};
use sha1::Sha1;

/// The namespace input of name-based generation, tagged by representation.
///
/// The three variants correspond to the three UUID representations this library converts
/// between, so a caller states explicitly which one it holds instead of the library guessing
/// from the shape of the value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Namespace<'a> {
    /// The canonical 8-4-4-4-12 hexadecimal string form.
    Text(&'a str),

    /// The 16-byte big-endian array form.
    Bytes(&'a [u8; 16]),

    /// The structured field record form.
    Fields(&'a Fields),
}

impl Namespace<'_> {
    /// Resolves the namespace to a field record.
    ///
    /// A malformed [`Text`](Namespace::Text) namespace fails with [`Error::MalformedInput`];
    /// the other variants cannot fail.
    pub fn to_fields(&self) -> Result<Fields, Error> {
        match self {
            Self::Text(src) => src.parse(),
            Self::Bytes(src) => Ok(Fields::from_bytes(**src)),
            Self::Fields(src) => Ok(**src),
        }
    }
}

/// Generates a UUIDv3 object from the MD5 hash of the namespace and name.
///
/// The output is deterministic: the same namespace and name always yield the same UUID.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid3, Namespace, Uuid};
///
/// let uuid = uuid3(
///     &Namespace::Bytes(Uuid::NAMESPACE_DNS.as_bytes()),
///     b"www.widgets.com",
/// )?;
/// assert_eq!(uuid.to_string(), "e902893a-9d22-3c7e-a7b8-d6e313b71d9f");
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn uuid3(namespace: &Namespace, name: &[u8]) -> Result<Uuid, Error> {
    fields_v3(namespace, name).map(Uuid::from)
}

/// Generates a UUIDv5 object from the SHA-1 hash of the namespace and name.
///
/// The output is deterministic: the same namespace and name always yield the same UUID.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid5, Namespace};
///
/// let ns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
/// let uuid = uuid5(&Namespace::Text(ns), b"www.widgets.com")?;
/// println!("{}", uuid);
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn uuid5(namespace: &Namespace, name: &[u8]) -> Result<Uuid, Error> {
    fields_v5(namespace, name).map(Uuid::from)
}

/// Generates the field record of a new version 3 UUID.
pub(crate) fn fields_v3(namespace: &Namespace, name: &[u8]) -> Result<Fields, Error> {
    let digest: [u8; 16] = Md5::digest(hash_input(namespace, name)?).into();
    Ok(assemble(digest, 3))
}

/// Generates the field record of a new version 5 UUID.
pub(crate) fn fields_v5(namespace: &Namespace, name: &[u8]) -> Result<Fields, Error> {
    let digest = Sha1::digest(hash_input(namespace, name)?);
    // keep the first 16 of SHA-1's 20 digest bytes
    let mut truncated = [0u8; 16];
    truncated.copy_from_slice(&digest[..16]);
    Ok(assemble(truncated, 5))
}

/// Serializes the namespace followed by the raw name bytes into the hash input.
///
/// The timestamp fields are hashed in swapped byte order; RFC 4122's sample name-based UUIDs
/// were computed that way (the name space ID was hashed in the byte order of a little-endian
/// host), and this library matches those published values.
fn hash_input(namespace: &Namespace, name: &[u8]) -> Result<Vec<u8>, Error> {
    let fields = swap_time_fields(namespace.to_fields()?);
    let mut buffer = Vec::with_capacity(16 + name.len());
    buffer.extend_from_slice(&fields.to_bytes());
    buffer.extend_from_slice(name);
    Ok(buffer)
}

/// Reads the 16 digest bytes back as a field record, undoes the byte swap of the time fields,
/// and stamps the variant and version bits.
fn assemble(digest: [u8; 16], version: u16) -> Fields {
    let mut fields = swap_time_fields(Fields::from_bytes(digest));
    fields.clock_seq_hi = (fields.clock_seq_hi & 0x3f) | 0x80;
    fields.time_hi = (fields.time_hi & 0x0fff) | (version << 12);
    fields
}

/// Swaps the byte order of the three timestamp fields.
const fn swap_time_fields(mut fields: Fields) -> Fields {
    fields.time_low = fields.time_low.swap_bytes();
    fields.time_mid = fields.time_mid.swap_bytes();
    fields.time_hi = fields.time_hi.swap_bytes();
    fields
}

#[cfg(test)]
mod tests {
    use super::{uuid3, uuid5, Namespace};
    use crate::{Error, Fields, Uuid, Variant};

    const DNS: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
    const URL: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";

    /// Matches the published sample vectors
    #[test]
    fn matches_published_sample_vectors() {
        // the v3 value appears in RFC 4122 Section 4.3
        let cases: &[(&str, &[u8], u8, &str)] = &[
            (
                DNS,
                b"www.widgets.com",
                3,
                "e902893a-9d22-3c7e-a7b8-d6e313b71d9f",
            ),
            (
                DNS,
                b"www.widgets.com",
                5,
                "13726f09-44a9-5eeb-8910-3525a23fb23b",
            ),
            (
                DNS,
                b"www.example.com",
                3,
                "0297c0cd-0468-38c5-b4e2-e54f1d56317e",
            ),
            (
                DNS,
                b"www.example.com",
                5,
                "abc032a2-2dd3-5c83-8804-31dbb25808d9",
            ),
            (
                URL,
                b"https://example.com/",
                5,
                "e36a959f-3f72-50ac-86ff-5c1e82758d65",
            ),
        ];

        for &(ns, name, version, expected) in cases {
            let ns = Namespace::Text(ns);
            let uuid = if version == 3 {
                uuid3(&ns, name).unwrap()
            } else {
                uuid5(&ns, name).unwrap()
            };
            assert_eq!(uuid.to_string(), expected);
            assert_eq!(uuid.version(), Some(version));
        }
    }

    /// Generates identical output for identical input
    #[test]
    fn generates_identical_output_for_identical_input() {
        let ns = Namespace::Text(DNS);
        assert_eq!(
            uuid3(&ns, b"www.widgets.com").unwrap(),
            uuid3(&ns, b"www.widgets.com").unwrap()
        );
        assert_eq!(
            uuid5(&ns, b"www.widgets.com").unwrap(),
            uuid5(&ns, b"www.widgets.com").unwrap()
        );
    }

    /// Generates identical output for every namespace representation
    #[test]
    fn generates_identical_output_for_every_namespace_representation() {
        let bytes = *Uuid::NAMESPACE_DNS.as_bytes();
        let fields = Fields::from_bytes(bytes);

        let from_text = uuid3(&Namespace::Text(DNS), b"www.widgets.com").unwrap();
        let from_bytes = uuid3(&Namespace::Bytes(&bytes), b"www.widgets.com").unwrap();
        let from_fields = uuid3(&Namespace::Fields(&fields), b"www.widgets.com").unwrap();

        assert_eq!(from_text, from_bytes);
        assert_eq!(from_text, from_fields);
    }

    /// Generates distinct output for distinct input
    #[test]
    fn generates_distinct_output_for_distinct_input() {
        let ns = Namespace::Text(DNS);
        assert_ne!(
            uuid3(&ns, b"www.widgets.com").unwrap(),
            uuid3(&ns, b"www.example.com").unwrap()
        );
        assert_ne!(
            uuid3(&ns, b"www.widgets.com").unwrap(),
            uuid5(&ns, b"www.widgets.com").unwrap()
        );
        assert_ne!(
            uuid5(&Namespace::Text(DNS), b"name").unwrap(),
            uuid5(&Namespace::Text(URL), b"name").unwrap()
        );
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        let ns = Namespace::Text(DNS);
        let names: [&[u8]; 4] = [b"a", b"www.widgets.com", b"", b"\x00\xff"];
        for name in names {
            let e = uuid3(&ns, name).unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(3));

            let e = uuid5(&ns, name).unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(5));
        }
    }

    /// Rejects a malformed text namespace
    #[test]
    fn rejects_malformed_text_namespace() {
        let ns = Namespace::Text("not-a-uuid");
        assert_eq!(uuid3(&ns, b"name"), Err(Error::MalformedInput));
        assert_eq!(uuid5(&ns, b"name"), Err(Error::MalformedInput));
    }
}
