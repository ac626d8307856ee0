// In: src/error.rs

//! This module defines the single, unified error type for the entire bitcodec library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    // =========================================================================
    // === Encode-Side Errors
    // =========================================================================
    /// The symbol lies outside `[min, max]` for the active codec.
    #[error("Value {value} is outside the codec range [{min}, {max}]")]
    ValueOutOfRange { value: u64, min: u64, max: u64 },

    #[error("Invalid codec configuration: {0}")]
    ConfigurationInvalid(String),

    #[error("Bit count {0} is outside 1..=64")]
    InvalidBitCount(u32),

    #[error("Bit writer has already been closed")]
    Closed,

    // =========================================================================
    // === Decode-Side Errors
    // =========================================================================
    /// The byte source ran dry in the middle of a symbol.
    #[error("Stream truncated in the middle of a symbol")]
    StreamTruncated,

    /// The decoded magnitude does not fit in 64 bits. Only corrupt or
    /// adversarial input produces this.
    #[error("Decoded symbol overflows 64 bits: {0}")]
    SymbolOverflow(String),

    #[error("Decoded value {value} does not fit in a {bits}-bit integer")]
    WidthOverflow { value: u64, bits: u32 },

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error originating from the underlying byte sink or source.
    #[error("I/O error: {0}")]
    Io(io::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        // A short read is the only EOF a bit reader ever sees, and it always
        // lands mid-symbol.
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::StreamTruncated
        } else {
            CodecError::Io(err)
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::ConfigurationInvalid(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_eof_maps_to_truncation() {
        let err: CodecError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, CodecError::StreamTruncated));

        let err: CodecError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
