#[macro_use]
extern crate serde;

mod ballot;
mod codec;
mod error;
mod hash;
mod keys;
mod ledger;
mod poll;
mod record;
mod serde_hex;
mod tally;

pub use ballot::*;
pub use codec::*;
pub use error::*;
pub use hash::*;
pub use keys::*;
pub use ledger::*;
pub use poll::*;
pub use record::*;
pub use serde_hex::*;
pub use tally::*;
