use std::io;

/// Result type alias for share-link operations.
pub type Result<T> = std::result::Result<T, ShareLinkError>;

/// Errors that can occur while encoding or decoding share tokens, or
/// while building share addresses.
///
/// Every input-quality problem a token can have maps to a variant here;
/// decoding never panics on untrusted input. Callers showing these to end
/// users are expected to collapse all decode failures into one generic
/// invalid-link message.
#[derive(Debug, thiserror::Error)]
pub enum ShareLinkError {
    #[error("Empty token")]
    EmptyToken,

    #[error("Invalid base64url encoding: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Token payload is empty after base64 decoding")]
    TruncatedToken,

    #[error("Unsupported token version: {0:#04x}")]
    UnsupportedVersion(u8),

    #[error("Compression failed: {0}")]
    Compress(#[source] io::Error),

    #[error("Decompression failed: {0}")]
    Decompress(#[source] io::Error),

    #[error("Document exceeds {limit} bytes when decompressed")]
    DocumentTooLarge { limit: usize },

    #[error("Malformed menu document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("Invalid base address: {0}")]
    InvalidBaseAddress(#[from] url::ParseError),
}
