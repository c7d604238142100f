use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base32;
use crate::checksum::crc16_xmodem;
use crate::error::DecodeError;

/// SEP-23 version tag for contract addresses (`2 << 3`, first symbol `C`).
pub const CONTRACT_VERSION_BYTE: u8 = 0x10;

/// Symbols in an encoded contract address: the 35-byte frame expands to
/// `35 * 8 / 5` base-32 symbols exactly, with no padding.
pub const ENCODED_LEN: usize = 56;

const PAYLOAD_LEN: usize = 32;
const HEX_LEN: usize = 2 * PAYLOAD_LEN;
/// Version byte, payload, and the two checksum bytes.
const FRAME_LEN: usize = 1 + PAYLOAD_LEN + 2;

/// A 32-byte Soroban contract identifier.
///
/// The raw bytes are the canonical form; the strkey string (`C...`) and the
/// 64-character hex rendering are interchangeable encodings of them.
/// `Display` produces the strkey form, `FromStr` parses it.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContractId(pub [u8; 32]);

impl ContractId {
    /// Construct from the canonical 32-byte form.
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        ContractId(bytes)
    }

    /// Borrow the underlying 32-byte identifier.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parses a strkey-encoded contract address.
    ///
    /// Input is case-insensitive and must be exactly [`ENCODED_LEN`] symbols
    /// of the unpadded RFC 4648 alphabet. The checksum is verified before
    /// the version byte, matching the decode order of the Stellar SDKs, so
    /// a corrupted string is reported as [`DecodeError::ChecksumMismatch`]
    /// even when the corruption also hits the version byte.
    pub fn from_string(encoded: &str) -> Result<Self, DecodeError> {
        let symbols = encoded.chars().count();
        if symbols != ENCODED_LEN {
            return Err(DecodeError::InvalidLength {
                expected: ENCODED_LEN,
                found: symbols,
            });
        }
        let frame = base32::decode(encoded)?;
        debug_assert_eq!(frame.len(), FRAME_LEN);
        let embedded = u16::from_le_bytes([frame[FRAME_LEN - 2], frame[FRAME_LEN - 1]]);
        let computed = crc16_xmodem(&frame[..FRAME_LEN - 2]);
        if embedded != computed {
            return Err(DecodeError::ChecksumMismatch {
                expected: computed,
                found: embedded,
            });
        }
        if frame[0] != CONTRACT_VERSION_BYTE {
            return Err(DecodeError::UnsupportedVersion { found: frame[0] });
        }
        let mut payload = [0u8; PAYLOAD_LEN];
        payload.copy_from_slice(&frame[1..=PAYLOAD_LEN]);
        Ok(ContractId(payload))
    }

    /// Renders the identifier as 64 lower-case hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses the 64-character hex rendering, case-insensitive.
    pub fn from_hex(hex_id: &str) -> Result<Self, DecodeError> {
        if hex_id.chars().count() != HEX_LEN {
            return Err(DecodeError::InvalidLength {
                expected: HEX_LEN,
                found: hex_id.chars().count(),
            });
        }
        let mut payload = [0u8; PAYLOAD_LEN];
        hex::decode_to_slice(hex_id, &mut payload)?;
        Ok(ContractId(payload))
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = CONTRACT_VERSION_BYTE;
        frame[1..=PAYLOAD_LEN].copy_from_slice(&self.0);
        let crc = crc16_xmodem(&frame[..=PAYLOAD_LEN]);
        frame[FRAME_LEN - 2..].copy_from_slice(&crc.to_le_bytes());
        f.write_str(&base32::encode(&frame))
    }
}

impl FromStr for ContractId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl AsRef<[u8]> for ContractId {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ContractId {
    fn from(bytes: [u8; 32]) -> Self {
        ContractId(bytes)
    }
}

impl TryFrom<&[u8]> for ContractId {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let payload: [u8; 32] = bytes.try_into().map_err(|_| DecodeError::InvalidLength {
            expected: PAYLOAD_LEN,
            found: bytes.len(),
        })?;
        Ok(ContractId(payload))
    }
}
