//! Lowercase hex encoding and strict, case-insensitive decoding.

use crate::HashError;

/// Lookup table: ASCII byte → nibble value (255 = invalid).
const HEX_DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0u8;
    loop {
        match i {
            b'0'..=b'9' => table[i as usize] = i - b'0',
            b'a'..=b'f' => table[i as usize] = i - b'a' + 10,
            b'A'..=b'F' => table[i as usize] = i - b'A' + 10,
            _ => {}
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

const HEX_ENCODE: &[u8; 16] = b"0123456789abcdef";

/// Hex-encode `bytes` into `buf`. `buf` must be at least `bytes.len() * 2` bytes.
///
/// # Panics
///
/// Panics if `buf` is too short.
pub fn hex_encode(bytes: &[u8], buf: &mut [u8]) {
    assert!(
        buf.len() >= bytes.len() * 2,
        "hex_encode: buffer too short"
    );
    for (pair, &b) in buf.chunks_exact_mut(2).zip(bytes) {
        pair[0] = HEX_ENCODE[(b >> 4) as usize];
        pair[1] = HEX_ENCODE[(b & 0x0f) as usize];
    }
}

/// Hex-encode `bytes` to a new lowercase `String`.
pub fn hex_to_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_ENCODE[(b >> 4) as usize] as char);
        out.push(HEX_ENCODE[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string into `buf`. The hex string length must be exactly
/// `buf.len() * 2`.
///
/// On error the contents of `buf` are unspecified; callers decode into a
/// scratch buffer and only keep it on success.
pub fn hex_decode(hex: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let raw = hex.as_bytes();
    if raw.len() != buf.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: hex.chars().count(),
        });
    }
    for (i, (out, pair)) in buf.iter_mut().zip(raw.chunks_exact(2)).enumerate() {
        let hi = HEX_DECODE[pair[0] as usize];
        let lo = HEX_DECODE[pair[1] as usize];
        if hi == 255 {
            return Err(invalid_char(hex, i * 2));
        }
        if lo == 255 {
            return Err(invalid_char(hex, i * 2 + 1));
        }
        *out = (hi << 4) | lo;
    }
    Ok(())
}

/// Check if a string is valid hexadecimal (even length, all hex chars).
pub fn is_valid_hex(s: &str) -> bool {
    s.len() % 2 == 0 && s.bytes().all(|b| HEX_DECODE[b as usize] != 255)
}

// Everything before `position` is ASCII hex, so it is always a char boundary.
fn invalid_char(hex: &str, position: usize) -> HashError {
    HashError::InvalidHex {
        position,
        character: hex[position..].chars().next().unwrap_or('\u{fffd}'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(hex: &str) -> Result<Vec<u8>, HashError> {
        let mut buf = vec![0u8; hex.len() / 2];
        hex_decode(hex, &mut buf)?;
        Ok(buf)
    }

    #[test]
    fn encode_decode_roundtrip() {
        let bytes = [0xde, 0xad, 0xbe, 0xef, 0x00, 0xff];
        let hex = hex_to_string(&bytes);
        assert_eq!(hex, "deadbeef00ff");
        assert_eq!(decode(&hex).unwrap(), bytes);
    }

    #[test]
    fn decode_uppercase() {
        assert_eq!(decode("DEADBEEF").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_mixed_case() {
        assert_eq!(decode("DeAdBeEf").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_invalid_char() {
        let err = decode("deadgoof").unwrap_err();
        match err {
            HashError::InvalidHex {
                position: 4,
                character: 'g',
            } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_reports_low_nibble_position() {
        let err = decode("0z").unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidHex {
                position: 1,
                character: 'z'
            }
        );
    }

    #[test]
    fn decode_reports_non_ascii_character() {
        let mut buf = [0u8; 2];
        let err = hex_decode("ab\u{e9}", &mut buf).unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidHex {
                position: 2,
                character: '\u{e9}'
            }
        );
    }

    #[test]
    fn decode_wrong_length() {
        let mut buf = [0u8; 4];
        let err = hex_decode("abc", &mut buf).unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidHexLength {
                expected: 8,
                actual: 3
            }
        );
    }

    #[test]
    fn is_valid_hex_checks() {
        assert!(is_valid_hex("deadbeef"));
        assert!(is_valid_hex("DEADBEEF"));
        assert!(is_valid_hex("0123456789abcdef"));
        assert!(!is_valid_hex("xyz"));
        assert!(!is_valid_hex("abc")); // odd length
        assert!(is_valid_hex(""));
    }

    #[test]
    fn encode_to_buffer() {
        let bytes = [0x01, 0x23, 0x45];
        let mut buf = [0u8; 6];
        hex_encode(&bytes, &mut buf);
        assert_eq!(&buf, b"012345");
    }

    #[test]
    fn all_byte_values_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let hex = hex_to_string(&bytes);
        assert_eq!(decode(&hex).unwrap(), bytes);
    }
}
