use crate::*;

/// What the ledger stores for one cast vote.
///
/// Immutable once submitted. The plaintext record is recoverable only with
/// the poll key, which never leaves the poll-administration store.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ballot {
    /// Encrypted canonical vote record (nonce-prefixed AES-256-GCM)
    #[serde(with = "hex_serde")]
    pub ciphertext: Vec<u8>,

    /// SHA-256 of the canonical vote record, for tamper detection
    #[serde(with = "BallotDigestHex")]
    pub integrity_digest: BallotDigest,

    /// Ledger address that submitted this ballot. The ledger is the sole
    /// source of truth here; submitter identity is never re-derived from
    /// plaintext.
    pub submitter: String,
}

impl Ballot {
    /// The submission path: encode, hash, and encrypt a vote record.
    ///
    /// Every failure here is fatal to the submission - a ballot that would
    /// later fail verification must never be created. In particular a vote
    /// for an option the poll does not offer is refused up front.
    pub fn seal(poll: &Poll, record: &VoteRecord, submitter: &str) -> Result<Self, Error> {
        if !poll.has_option(&record.selected_option) {
            return Err(Error::OptionNotOffered(
                poll.id,
                record.selected_option.clone(),
            ));
        }

        let canonical = record.canonical_bytes()?;
        let integrity_digest = integrity_digest(&canonical);
        let ciphertext = encrypt_ballot(&poll.key, &canonical)?;

        Ok(Ballot {
            ciphertext,
            integrity_digest,
            submitter: submitter.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll() -> Poll {
        Poll::new(
            3,
            "Snack",
            "Pick one",
            vec!["Apples".to_string(), "Pears".to_string()],
            3600,
        )
        .unwrap()
    }

    #[test]
    fn seal_round_trips_through_the_poll_key() {
        let poll = poll();
        let record = VoteRecord::new(poll.id, "Apples", "VOTER_1");
        let ballot = Ballot::seal(&poll, &record, "0xabc").unwrap();

        let plaintext = decrypt_ballot(&poll.key, &ballot.ciphertext).unwrap();
        assert_eq!(VoteRecord::from_canonical_bytes(&plaintext).unwrap(), record);
        assert_eq!(integrity_digest(&plaintext), ballot.integrity_digest);
    }

    #[test]
    fn seal_refuses_unknown_options() {
        let poll = poll();
        let record = VoteRecord::new(poll.id, "Cake", "VOTER_1");
        assert!(matches!(
            Ballot::seal(&poll, &record, "0xabc"),
            Err(Error::OptionNotOffered(3, _))
        ));
    }

    #[test]
    fn serialized_form_is_hex() {
        let poll = poll();
        let record = VoteRecord::new(poll.id, "Pears", "VOTER_1");
        let ballot = Ballot::seal(&poll, &record, "0xabc").unwrap();

        let json = serde_json::to_value(&ballot).unwrap();
        assert_eq!(
            json["integrity_digest"].as_str().unwrap(),
            ballot.integrity_digest.to_hex()
        );
        assert_eq!(
            json["ciphertext"].as_str().unwrap(),
            hex::encode(&ballot.ciphertext)
        );
    }
}
