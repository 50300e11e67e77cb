use thiserror::Error;

/// Failure of a single completion call.
///
/// The HTTP layer does not distinguish the variants; callers only ever see
/// the `Display` text.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0} is not set")]
    MissingConfig(&'static str),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Error code: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}
