use thiserror::Error;

/// Error types
///
/// These are call-level failures: they indicate a setup or caller error and
/// abort the whole operation. Problems with an individual ballot during a
/// tally are never errors - they are classified as a [`BallotFailure`] in
/// the audit trail and the batch continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ballotseal: poll must offer at least two options")]
    TooFewOptions,

    #[error("ballotseal: poll option may not be empty")]
    EmptyOption,

    #[error("ballotseal: invalid poll key - invalid hexadecimal")]
    KeyBadHex,

    #[error("ballotseal: invalid poll key - wrong length")]
    KeyBadLen,

    #[error("ballotseal: invalid integrity digest - invalid hexadecimal")]
    DigestBadHex,

    #[error("ballotseal: invalid integrity digest - wrong length")]
    DigestBadLen,

    #[error("ballotseal: entropy source failure: {0}")]
    EntropyFailure(#[from] rand::Error),

    #[error("ballotseal: failed to encrypt vote record")]
    EncryptionFailed,

    #[error("ballotseal: failed to decrypt ballot")]
    DecryptionFailed,

    #[error("ballotseal: malformed canonical vote record")]
    MalformedRecord,

    #[error("ballotseal: vote record field too large to encode")]
    RecordTooLarge,

    #[error("ballotseal: poll {0} does not offer option {1:?}")]
    OptionNotOffered(u64, String),

    #[error("ballotseal: poll {0} not found on ledger")]
    PollNotFound(u64),

    #[error("ballotseal: submitter has already voted in poll {0}")]
    AlreadyVoted(u64),
}

/// Why a single ballot was excluded from the tally.
///
/// Each submitted ballot is verified independently; the first check that
/// fails becomes the ballot's terminal classification in the audit trail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallotFailure {
    /// The ciphertext could not be decrypted with the poll key (corruption,
    /// truncation, or a wrong-key submission).
    #[error("failed to decrypt ballot")]
    DecryptFailure,

    /// Decryption succeeded but the plaintext is not a canonical vote record.
    #[error("malformed vote record")]
    MalformedRecord,

    /// The recomputed digest does not match the digest stored on the ledger.
    #[error("integrity digest mismatch")]
    IntegrityMismatch,

    /// The recorded option is not one the poll offers.
    #[error("option not offered by poll")]
    InvalidOption,
}
