use crate::*;
use indexmap::IndexMap;

/// The audit trail's verdict on one submitted ballot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuditEntry {
    pub submitter: String,

    /// Present only when the ballot verified
    pub selected_option: Option<String>,
    pub timestamp: Option<u64>,

    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<BallotFailure>,
}

impl AuditEntry {
    fn verified(submitter: &str, record: &VoteRecord) -> Self {
        AuditEntry {
            submitter: submitter.to_string(),
            selected_option: Some(record.selected_option.clone()),
            timestamp: Some(record.timestamp),
            verified: true,
            failure: None,
        }
    }

    fn rejected(submitter: &str, failure: BallotFailure) -> Self {
        AuditEntry {
            submitter: submitter.to_string(),
            selected_option: None,
            timestamp: None,
            verified: false,
            failure: Some(failure),
        }
    }
}

/// Verified per-option counts plus a per-ballot audit trail.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TallyResult {
    /// option -> verified vote count, in the poll's option order. Options
    /// nobody voted for appear with count 0.
    pub counts: IndexMap<String, u64>,

    pub total_votes: u64,

    /// One entry per submitted ballot, in ledger submission order
    pub audit: Vec<AuditEntry>,
}

impl TallyResult {
    /// Decrypt, verify, and aggregate every ballot submitted to a poll.
    ///
    /// A ballot counts iff it decrypts under the poll key, parses as a
    /// canonical vote record, its recomputed digest matches the one stored
    /// on the ledger, and its option is one the poll offers. Anything else
    /// degrades that single ballot's audit entry and never aborts the
    /// batch.
    ///
    /// Duplicate submitters are counted independently: eligibility and
    /// double-vote enforcement are delegated to the ledger.
    pub fn tally(poll: &Poll, ballots: &[Ballot]) -> Result<Self, Error> {
        // A poll without a usable option set is a setup error, not a
        // ballot problem.
        validate_options(&poll.options)?;

        let mut counts: IndexMap<String, u64> = IndexMap::with_capacity(poll.options.len());
        for option in &poll.options {
            counts.insert(option.clone(), 0);
        }

        let mut audit = Vec::with_capacity(ballots.len());
        for ballot in ballots {
            match verify_ballot(poll, ballot) {
                Ok(record) => {
                    // Membership was checked during verification, so this
                    // never inserts a new option
                    *counts.entry(record.selected_option.clone()).or_insert(0) += 1;
                    audit.push(AuditEntry::verified(&ballot.submitter, &record));
                }
                Err(failure) => {
                    audit.push(AuditEntry::rejected(&ballot.submitter, failure));
                }
            }
        }

        let total_votes = counts.values().sum();

        Ok(TallyResult {
            counts,
            total_votes,
            audit,
        })
    }
}

/// Independently verify a single ballot against the poll's key and options.
fn verify_ballot(poll: &Poll, ballot: &Ballot) -> Result<VoteRecord, BallotFailure> {
    let plaintext = decrypt_ballot(&poll.key, &ballot.ciphertext)
        .map_err(|_| BallotFailure::DecryptFailure)?;

    let record = VoteRecord::from_canonical_bytes(&plaintext)
        .map_err(|_| BallotFailure::MalformedRecord)?;

    let reencoded = record
        .canonical_bytes()
        .map_err(|_| BallotFailure::MalformedRecord)?;
    if integrity_digest(&reencoded) != ballot.integrity_digest {
        return Err(BallotFailure::IntegrityMismatch);
    }

    if !poll.has_option(&record.selected_option) {
        return Err(BallotFailure::InvalidOption);
    }

    Ok(record)
}

/// Tally a poll straight off a ledger snapshot.
pub fn tally_poll<L: Ledger>(poll: &Poll, ledger: &L) -> Result<TallyResult, Error> {
    let ballots = ledger.fetch_ballots(poll.id)?;
    TallyResult::tally(poll, &ballots)
}
