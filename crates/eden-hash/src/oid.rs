use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_encode, hex_to_string};
use crate::{HashError, DIGEST_LEN, HEX_LEN};

/// A content identifier: the 20-byte SHA-1 digest of an immutable object.
///
/// The bytes are held inline and copied on construction, so an `ObjectId`
/// never aliases the buffer it was built from. Equality and ordering are
/// byte-wise, with byte 0 most significant, which matches comparing the
/// canonical hex forms as text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; DIGEST_LEN]);

impl ObjectId {
    /// The null id (all zeros).
    pub const NULL: Self = Self([0u8; DIGEST_LEN]);

    /// Create an ObjectId from a fixed-size digest.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Create an ObjectId from a byte slice, which must be exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| HashError::InvalidHashLength {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Create an ObjectId from its 40-character hex form.
    ///
    /// Upper- and lowercase digits are both accepted.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex_decode(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Check if this is the null (all-zeros) id.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Get the canonical lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex_to_string(&self.0)
    }

    /// Get the first byte of the hash (for fan-out bucketing).
    pub fn first_byte(&self) -> u8 {
        self.0[0]
    }

    /// Check if this id's hex form starts with the given hex prefix.
    pub fn starts_with_hex(&self, prefix: &str) -> bool {
        let hex = self.to_hex();
        hex.starts_with(&prefix.to_ascii_lowercase())
    }
}

impl From<[u8; DIGEST_LEN]> for ObjectId {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = HashError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; HEX_LEN];
        hex_encode(&self.0, &mut buf);
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
