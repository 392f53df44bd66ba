use crate::*;
use std::collections::BTreeMap;

/// Proof of a successful ballot submission.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Receipt {
    pub transaction_hash: String,
    pub block_number: u64,
}

/// The external ballot ledger.
///
/// Passed in as a capability so callers and tests can substitute their own
/// backing store. The ledger durably stores each ballot's ciphertext,
/// integrity digest, and submitter, and is the sole enforcer of eligibility
/// and double-vote rules - the tally engine performs no deduplication of
/// its own.
pub trait Ledger {
    /// Append a sealed ballot to a poll's record.
    fn submit_ballot(&mut self, poll_id: u64, ballot: Ballot) -> Result<Receipt, Error>;

    /// A closed-world snapshot of every ballot submitted to a poll, in
    /// submission order.
    fn fetch_ballots(&self, poll_id: u64) -> Result<Vec<Ballot>, Error>;

    /// Has this submitter already voted in this poll?
    fn has_voted(&self, poll_id: u64, submitter: &str) -> bool;
}

/// A simple ledger that uses an in-memory BTreeMap. Mirrors the on-chain
/// contract's behavior, including its double-vote refusal.
#[derive(Default, Clone)]
pub struct MemLedger {
    inner: BTreeMap<u64, Vec<Ballot>>,
    height: u64,
}

impl Ledger for MemLedger {
    fn submit_ballot(&mut self, poll_id: u64, ballot: Ballot) -> Result<Receipt, Error> {
        if self.has_voted(poll_id, &ballot.submitter) {
            return Err(Error::AlreadyVoted(poll_id));
        }

        self.height += 1;
        let mut tx_bytes = self.height.to_be_bytes().to_vec();
        tx_bytes.extend_from_slice(&ballot.ciphertext);
        let transaction_hash = format!("0x{}", integrity_digest(&tx_bytes).to_hex());

        self.inner.entry(poll_id).or_default().push(ballot);

        Ok(Receipt {
            transaction_hash,
            block_number: self.height,
        })
    }

    fn fetch_ballots(&self, poll_id: u64) -> Result<Vec<Ballot>, Error> {
        Ok(self.inner.get(&poll_id).cloned().unwrap_or_default())
    }

    fn has_voted(&self, poll_id: u64, submitter: &str) -> bool {
        self.inner
            .get(&poll_id)
            .map(|ballots| ballots.iter().any(|b| b.submitter == submitter))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll() -> Poll {
        Poll::new(
            9,
            "Mascot",
            "Pick one",
            vec!["Crab".to_string(), "Gopher".to_string()],
            3600,
        )
        .unwrap()
    }

    #[test]
    fn submit_and_fetch_in_order() {
        let poll = poll();
        let mut ledger = MemLedger::default();

        for (i, submitter) in ["0xaaa", "0xbbb", "0xccc"].iter().enumerate() {
            let record = VoteRecord::new(poll.id, "Crab", &format!("VOTER_{}", i));
            let ballot = Ballot::seal(&poll, &record, submitter).unwrap();
            let receipt = ledger.submit_ballot(poll.id, ballot).unwrap();
            assert_eq!(receipt.block_number, i as u64 + 1);
            assert!(receipt.transaction_hash.starts_with("0x"));
        }

        let ballots = ledger.fetch_ballots(poll.id).unwrap();
        assert_eq!(ballots.len(), 3);
        assert_eq!(ballots[0].submitter, "0xaaa");
        assert_eq!(ballots[2].submitter, "0xccc");

        // Other polls are untouched
        assert!(ledger.fetch_ballots(999).unwrap().is_empty());
    }

    #[test]
    fn refuses_double_votes() {
        let poll = poll();
        let mut ledger = MemLedger::default();

        let record = VoteRecord::new(poll.id, "Gopher", "VOTER_1");
        let ballot = Ballot::seal(&poll, &record, "0xaaa").unwrap();
        ledger.submit_ballot(poll.id, ballot.clone()).unwrap();

        assert!(ledger.has_voted(poll.id, "0xaaa"));
        assert!(!ledger.has_voted(poll.id, "0xbbb"));
        assert!(matches!(
            ledger.submit_ballot(poll.id, ballot),
            Err(Error::AlreadyVoted(9))
        ));
    }
}
