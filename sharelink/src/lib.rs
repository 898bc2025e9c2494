//! SnapMenu Share-Link Library
//!
//! This library packs a menu document into a compact, URL-safe token and
//! back. The token is the menu's only durable representation: the URL is
//! the database, and whoever holds the link holds the document. No server
//! ever sees it.
//!
//! Pipeline: canonical JSON → zstd → one-byte version prefix → base64url.
//! Menu text is highly repetitive (field names, category and price
//! patterns), so the token usually fits a scannable QR symbol;
//! [`share::ShareAddress`] reports when it does not.
//!
//! Encoding and decoding are synchronous pure functions with no I/O and
//! no shared state, safe to call from any context.

pub mod decode;
pub mod encode;
pub mod error;
pub mod share;

pub use decode::{decode, MAX_DOCUMENT_BYTES};
pub use encode::encode;
pub use error::{Result, ShareLinkError};
pub use share::{build, extract, ShareAddress, MENU_PARAM, QR_ADVISORY_LIMIT};

#[cfg(test)]
mod tests {
    use super::*;
    use snapmenu::MenuDocument;

    #[test]
    fn test_lib_exports() {
        let _: fn(&MenuDocument) -> Result<String> = encode;
        let _: fn(&str) -> Result<MenuDocument> = decode;
    }
}
