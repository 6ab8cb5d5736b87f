use async_trait::async_trait;

use crate::entry::Entry;
use crate::error::LookupError;

/// Remote word-lookup seam: one outbound request per search term.
///
/// The term arrives already trimmed and lower-cased. Implementations must
/// not retry or cache; staleness of concurrent lookups is handled by the
/// caller through sequence numbers.
#[async_trait]
pub trait Lexicon: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<Vec<Entry>, LookupError>;
}
