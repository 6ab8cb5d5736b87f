use thiserror::Error;

/// Failures from a lookup attempt. Every variant surfaces to the user as
/// the same "no definitions found" message; the split exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service answered with a non-success status. Status codes are not
    /// differentiated — anything non-2xx means the word was not found.
    #[error("no match for \"{term}\"")]
    NotFound { term: String },

    /// The request never completed (connect, TLS, or read failure).
    #[error("transport failure: {0}")]
    Transport(String),

    /// A success status carried a body that did not decode as entries.
    #[error("malformed response: {0}")]
    Malformed(String),
}
