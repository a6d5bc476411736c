//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when decoding frames from the watch.
///
/// Unknown endpoints and command codes are not errors; they decode to an
/// empty result and are only logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Frame ended before a fixed-width field could be read.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Bytes needed, counted from the start of the frame.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::FrameTooShort {
            expected: 9,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "frame too short: expected at least 9 bytes, got 5"
        );
    }
}
