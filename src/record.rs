use crate::*;
use std::convert::TryFrom;
use std::time::{SystemTime, UNIX_EPOCH};

// Canonical encoding type tags
const TAG_UINT: u8 = 0x01;
const TAG_STRING: u8 = 0x02;

/// The plaintext of a single vote.
///
/// This is what gets canonically encoded, hashed, and encrypted. It is never
/// persisted as-is: only its ciphertext and integrity digest reach the
/// ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    pub poll_id: u64,
    pub selected_option: String,
    pub voter_id: String,

    /// Unix seconds at submission time
    pub timestamp: u64,
}

impl VoteRecord {
    pub fn new(poll_id: u64, selected_option: &str, voter_id: &str) -> Self {
        VoteRecord {
            poll_id,
            selected_option: selected_option.to_string(),
            voter_id: voter_id.to_string(),
            timestamp: unix_now(),
        }
    }

    /// Canonically encode this record.
    ///
    /// The encoding is deterministic with a fixed field order - it must NOT
    /// go through a generic serializer, because two encodings of the same
    /// record have to hash identically. Every field carries a type tag, and
    /// strings carry a length prefix so adjacent fields can never be
    /// reassociated (`"12","3"` vs `"1","23"`).
    ///
    /// Layout, in order:
    ///   0x01 + u64 BE poll_id
    ///   0x02 + u32 BE length + UTF-8 selected_option
    ///   0x02 + u32 BE length + UTF-8 voter_id
    ///   0x01 + u64 BE timestamp
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(
            2 * (1 + 8)
                + 2 * (1 + 4)
                + self.selected_option.len()
                + self.voter_id.len(),
        );
        encode_uint(&mut out, self.poll_id);
        encode_string(&mut out, &self.selected_option)?;
        encode_string(&mut out, &self.voter_id)?;
        encode_uint(&mut out, self.timestamp);
        Ok(out)
    }

    /// Parse a canonical encoding back into a record.
    ///
    /// Rejects wrong tags, short reads, invalid UTF-8, and trailing bytes.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader { bytes, pos: 0 };
        let poll_id = reader.read_uint()?;
        let selected_option = reader.read_string()?;
        let voter_id = reader.read_string()?;
        let timestamp = reader.read_uint()?;
        if reader.pos != bytes.len() {
            return Err(Error::MalformedRecord);
        }
        Ok(VoteRecord {
            poll_id,
            selected_option,
            voter_id,
            timestamp,
        })
    }
}

fn encode_uint(out: &mut Vec<u8>, value: u64) {
    out.push(TAG_UINT);
    out.extend_from_slice(&value.to_be_bytes());
}

fn encode_string(out: &mut Vec<u8>, value: &str) -> Result<(), Error> {
    let len = u32::try_from(value.len()).map_err(|_| Error::RecordTooLarge)?;
    out.push(TAG_STRING);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(value.as_bytes());
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let end = self.pos.checked_add(n).ok_or(Error::MalformedRecord)?;
        if end > self.bytes.len() {
            return Err(Error::MalformedRecord);
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_tag(&mut self, expected: u8) -> Result<(), Error> {
        if self.take(1)?[0] != expected {
            return Err(Error::MalformedRecord);
        }
        Ok(())
    }

    fn read_uint(&mut self) -> Result<u64, Error> {
        self.read_tag(TAG_UINT)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_be_bytes(buf))
    }

    fn read_string(&mut self) -> Result<String, Error> {
        self.read_tag(TAG_STRING)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        let len = u32::from_be_bytes(buf) as usize;
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| Error::MalformedRecord)
    }
}

/// Current time in unix seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
