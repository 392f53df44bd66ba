use crate::*;
use aes_gcm::aead::{generic_array::GenericArray, Aead, NewAead};
use aes_gcm::Aes256Gcm;
use rand::{thread_rng, Rng};

const NONCE_LENGTH: usize = 12;

/// Encrypt a canonical vote-record encoding with the poll key.
///
/// The ciphertext is self-contained: a random 96-bit nonce is prepended so
/// the ledger-stored blob alone plus the key recovers the plaintext.
pub fn encrypt_ballot(key: &PollKey, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let aead = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));

    let mut nonce = [0u8; NONCE_LENGTH];
    thread_rng().fill(&mut nonce);
    let nonce = GenericArray::from_slice(&nonce);

    let ciphertext = aead
        .encrypt(nonce, plaintext)
        .map_err(|_| Error::EncryptionFailed)?;

    let mut output = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
    output.extend(nonce);
    output.extend(ciphertext);

    Ok(output)
}

/// Decrypt a ledger-stored ciphertext with the poll key.
///
/// AES-GCM is authenticated, so any corruption, truncation, or wrong key is
/// a [`Error::DecryptionFailed`] - never a silently wrong plaintext.
pub fn decrypt_ballot(key: &PollKey, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    if ciphertext.len() < NONCE_LENGTH {
        return Err(Error::DecryptionFailed);
    }

    let aead = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));

    let nonce = GenericArray::from_slice(&ciphertext[..NONCE_LENGTH]);
    let encrypted = &ciphertext[NONCE_LENGTH..];

    aead.decrypt(nonce, encrypted)
        .map_err(|_| Error::DecryptionFailed)
}
