use crate::*;
use rand::RngCore;

/// Length of a poll key in bytes (AES-256).
pub const POLL_KEY_LENGTH: usize = 32;

/// The symmetric key minted for a poll at creation time.
///
/// One key per poll, generated once and read-only afterward. It is persisted
/// alongside the poll record as a 64-hex-character string and is never
/// transmitted to the ledger.
#[derive(Clone, PartialEq, Eq)]
pub struct PollKey([u8; POLL_KEY_LENGTH]);

impl PollKey {
    /// Generate a fresh key from the operating system CSPRNG.
    ///
    /// Entropy failure is fatal to poll creation, not to the tally engine.
    pub fn generate() -> Result<Self, Error> {
        let mut bytes = [0u8; POLL_KEY_LENGTH];
        rand::rngs::OsRng.try_fill_bytes(&mut bytes)?;
        Ok(PollKey(bytes))
    }

    /// View this key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; POLL_KEY_LENGTH] {
        &self.0
    }

    /// Construct a `PollKey` from a slice of bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != POLL_KEY_LENGTH {
            return Err(Error::KeyBadLen);
        }
        let mut key = [0u8; POLL_KEY_LENGTH];
        key.copy_from_slice(bytes);
        Ok(PollKey(key))
    }

    /// The persisted form: exactly 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse the persisted 64-hex-character form.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex::decode(s).map_err(|_| Error::KeyBadHex)?;
        PollKey::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for PollKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Keys stay out of debug output.
impl std::fmt::Debug for PollKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "PollKey(..)")
    }
}

/// Mint a voter identifier: `VOTER_` followed by 16 uppercase hex characters.
pub fn generate_voter_id() -> Result<String, Error> {
    let mut bytes = [0u8; 8];
    rand::rngs::OsRng.try_fill_bytes(&mut bytes)?;
    Ok(format!("VOTER_{}", hex::encode_upper(&bytes)))
}
