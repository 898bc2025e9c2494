//! Contract for the AI extraction collaborator.
//!
//! Extraction is external: some implementation hands menu photos to a
//! model and gets a structured document back. The core only fixes the
//! boundary: images in, a conforming [`MenuDocument`] or a human-readable
//! error out. It is the one asynchronous operation in the surrounding
//! system; retries and cancellation are the caller's concern.

use crate::menu::MenuDocument;
use async_trait::async_trait;

/// An image captured for extraction: raw bytes plus the MIME type the
/// acquisition layer reported.
#[derive(Debug, Clone)]
pub struct MenuImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Extraction failure.
///
/// Carries a human-readable message only; the collaborator defines no
/// structured error codes, and callers surface the message verbatim.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ExtractionError(pub String);

#[async_trait]
pub trait MenuExtractor: Send + Sync {
    async fn extract(&self, images: &[MenuImage]) -> Result<MenuDocument, ExtractionError>;
}
