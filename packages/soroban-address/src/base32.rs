//! Unpadded RFC 4648 base-32, the alphabet strkey encodes with.
//!
//! Encoding delegates to the `base32` crate. Decoding is bit-unpacked here
//! because parse errors must report which character was rejected and where,
//! which the crate's `Option`-returning decoder cannot do.

use ::base32::Alphabet;

use crate::error::DecodeError;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };

pub(crate) fn encode(data: &[u8]) -> String {
    ::base32::encode(ALPHABET, data)
}

/// Decodes an unpadded base-32 string, canonicalizing to upper case first.
///
/// Callers are expected to have checked the symbol count already; trailing
/// bits that do not fill a byte are discarded, as RFC 4648 prescribes for
/// unpadded input.
pub(crate) fn decode(symbols: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(symbols.len() * 5 / 8);
    let mut acc: u16 = 0;
    let mut bits: u8 = 0;
    for (position, character) in symbols.chars().enumerate() {
        let character = character.to_ascii_uppercase();
        let value = match character {
            'A'..='Z' => character as u16 - 'A' as u16,
            '2'..='7' => character as u16 - '2' as u16 + 26,
            _ => return Err(DecodeError::InvalidAlphabet { character, position }),
        };
        acc = (acc << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{decode, encode};
    use crate::error::DecodeError;

    #[test]
    fn encode_matches_rfc4648_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "MY");
        assert_eq!(encode(b"fo"), "MZXQ");
        assert_eq!(encode(b"foo"), "MZXW6");
        assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
    }

    #[test]
    fn decode_inverts_encode() {
        for data in [&b""[..], b"f", b"foobar", &[0u8; 35], &[0xff; 35]] {
            assert_eq!(decode(&encode(data)).unwrap(), data);
        }
    }

    #[test]
    fn decode_accepts_lower_case() {
        assert_eq!(decode("mzxw6ytboi").unwrap(), b"foobar");
    }

    #[test]
    fn decode_rejects_characters_outside_the_alphabet() {
        assert_eq!(
            decode("MZX0"),
            Err(DecodeError::InvalidAlphabet {
                character: '0',
                position: 3
            })
        );
        // '1' and '8' are excluded from the RFC 4648 alphabet.
        assert_matches!(decode("1AAA"), Err(DecodeError::InvalidAlphabet { position: 0, .. }));
        assert_matches!(decode("AA8A"), Err(DecodeError::InvalidAlphabet { position: 2, .. }));
        // Padding is not part of the unpadded encoding.
        assert_matches!(decode("MZXQ===="), Err(DecodeError::InvalidAlphabet { character: '=', .. }));
    }
}
