use thiserror::Error;

/// Errors produced when parsing a contract address or its hex rendering.
///
/// Every variant is an input-validation failure; none are transient.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum DecodeError {
    #[error("character {character:?} at position {position} is not in the base-32 alphabet")]
    InvalidAlphabet { character: char, position: usize },
    #[error("expected {expected} characters, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("version byte {found:#04x} is not the contract address tag")]
    UnsupportedVersion { found: u8 },
    #[error("embedded checksum {found:#06x} does not match computed checksum {expected:#06x}")]
    ChecksumMismatch { expected: u16, found: u16 },
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
