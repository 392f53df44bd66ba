use crate::*;

/// An administered poll.
///
/// Owned by the poll-administration store; the tally engine only ever reads
/// `options` and `key`. The key is set once at creation and never rotated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Poll {
    pub id: u64,
    pub title: String,
    pub description: String,

    /// Ordered set of options voters choose between
    pub options: Vec<String>,

    /// This poll's symmetric key. Persisted server-side as 64 hex
    /// characters, never sent to the ledger.
    #[serde(with = "PollKeyHex")]
    pub key: PollKey,

    /// Unix seconds at poll creation
    pub created_at: u64,
    pub duration_seconds: u64,
}

impl Poll {
    /// Create a new poll, minting its symmetric key.
    pub fn new(
        id: u64,
        title: &str,
        description: &str,
        options: Vec<String>,
        duration_seconds: u64,
    ) -> Result<Self, Error> {
        validate_options(&options)?;
        let poll = Poll {
            id,
            title: title.to_string(),
            description: description.to_string(),
            options,
            key: PollKey::generate()?,
            created_at: unix_now(),
            duration_seconds,
        };
        Ok(poll)
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Whether the poll accepts votes at `now` (unix seconds).
    ///
    /// Window enforcement is the ledger's job; this mirrors its check for
    /// callers that want to filter before submitting.
    pub fn is_open(&self, now: u64) -> bool {
        now >= self.created_at && now <= self.created_at.saturating_add(self.duration_seconds)
    }
}

pub(crate) fn validate_options(options: &[String]) -> Result<(), Error> {
    if options.len() < 2 {
        return Err(Error::TooFewOptions);
    }
    if options.iter().any(|o| o.is_empty()) {
        return Err(Error::EmptyOption);
    }
    Ok(())
}
