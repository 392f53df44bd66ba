use crate::*;
use sha2::{Digest, Sha256};

/// Length of an integrity digest in bytes (SHA-256).
pub const DIGEST_LENGTH: usize = 32;

/// The integrity digest stored on the ledger next to each ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallotDigest(pub [u8; DIGEST_LENGTH]);

impl BallotDigest {
    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != DIGEST_LENGTH {
            return Err(Error::DigestBadLen);
        }
        let mut digest = [0u8; DIGEST_LENGTH];
        digest.copy_from_slice(bytes);
        Ok(BallotDigest(digest))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex::decode(s).map_err(|_| Error::DigestBadHex)?;
        BallotDigest::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for BallotDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for BallotDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash a canonical vote-record encoding.
///
/// Pure function: equal inputs always produce equal digests, and any change
/// to the input changes the digest with overwhelming probability.
pub fn integrity_digest(bytes: &[u8]) -> BallotDigest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();

    let mut out = [0u8; DIGEST_LENGTH];
    out.copy_from_slice(&digest);
    BallotDigest(out)
}
