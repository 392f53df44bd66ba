use crate::*;
use std::borrow::Cow;

pub use hex_buffer_serde::Hex;

// a single-purpose type for use in `#[serde(with)]`
pub enum PollKeyHex {}

impl Hex<PollKey> for PollKeyHex {
    type Error = String;

    fn create_bytes(key: &PollKey) -> Cow<[u8]> {
        key.as_bytes().as_ref().into()
    }

    fn from_bytes(bytes: &[u8]) -> Result<PollKey, String> {
        PollKey::from_bytes(bytes).map_err(|e| format!("{}", e))
    }
}

// a single-purpose type for use in `#[serde(with)]`
pub enum BallotDigestHex {}

impl Hex<BallotDigest> for BallotDigestHex {
    type Error = String;

    fn create_bytes(digest: &BallotDigest) -> Cow<[u8]> {
        digest.as_bytes().as_ref().into()
    }

    fn from_bytes(bytes: &[u8]) -> Result<BallotDigest, String> {
        BallotDigest::from_bytes(bytes).map_err(|e| format!("{}", e))
    }
}
