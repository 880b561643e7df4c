/// Errors produced when building an [`ObjectId`](crate::ObjectId) from
/// external input.
///
/// Every variant is an invalid-argument rejection; computing a digest never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },
}

impl HashError {
    /// Whether the error rejects a caller-supplied argument.
    ///
    /// Always true today; callers that only care about the error kind can
    /// match on this instead of the individual variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidHex { .. } | Self::InvalidHexLength { .. } | Self::InvalidHashLength { .. }
        )
    }
}
