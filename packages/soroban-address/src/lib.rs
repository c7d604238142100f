//! Codec for the strkey encoding of Soroban contract addresses.
//!
//! A contract address is a 32-byte identifier rendered as a checksummed,
//! upper-case base-32 string starting with `C`, per
//! [SEP-23](https://github.com/stellar/stellar-protocol/blob/master/ecosystem/sep-0023.md):
//! a one-byte version tag, the 32-byte payload and a little-endian
//! CRC-16/XMODEM checksum over the preceding 33 bytes, base-32 encoded
//! without padding.
//!
//! All operations are pure and allocate nothing beyond the returned value.

mod base32;
mod checksum;
mod contract;
mod error;

pub use contract::{ContractId, CONTRACT_VERSION_BYTE, ENCODED_LEN};
pub use error::DecodeError;
