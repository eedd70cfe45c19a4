//! Error types for the copy engine.

use thiserror::Error;

/// Failure talking to the upstream text-generation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to text provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("text provider returned status {0}")]
    Status(u16),

    #[error("text provider response had no text candidates")]
    NoCandidates,
}

/// Failure of a single-field generation call.
///
/// Bulk generation never surfaces these; it falls back to deterministic
/// defaults instead. Single-field calls have no structural shape to salvage
/// so they propagate.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("AI copy generation is not configured")]
    Disabled,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("text provider returned an empty answer")]
    EmptyAnswer,
}
