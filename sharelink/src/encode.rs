use crate::error::{Result, ShareLinkError};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use snapmenu::MenuDocument;

/// Token format version, the first byte of every payload. Bumped when the
/// pipeline changes incompatibly, so foreign tokens fail with a version
/// error instead of a decompression accident.
pub(crate) const TOKEN_VERSION: u8 = 1;

/// zstd level for the compression stage. Menus are short and highly
/// repetitive (field names, category and price patterns), so a high level
/// buys QR capacity at negligible encoding cost.
const COMPRESSION_LEVEL: i32 = 19;

/// Serialize a document into its canonical JSON bytes.
fn serialize_document(document: &MenuDocument) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(document)?)
}

/// Compress canonical bytes with zstd.
fn compress(json: &[u8]) -> Result<Vec<u8>> {
    zstd::stream::encode_all(json, COMPRESSION_LEVEL).map_err(ShareLinkError::Compress)
}

/// Encode a payload to base64url (URL-safe base64 without padding).
fn encode_base64url(payload: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(payload)
}

/// Encode a menu document into a URL-safe share token.
///
/// The token uses only `[A-Za-z0-9_-]` and can be embedded in a query
/// value with no further percent-escaping, regardless of what the
/// document's text contains. Encoding is deterministic: the same document
/// always yields the same token for a given token version.
///
/// # Errors
///
/// Returns `ShareLinkError` if serialization or compression fails, which
/// cannot happen for a well-formed document; callers should still check.
pub fn encode(document: &MenuDocument) -> Result<String> {
    let json = serialize_document(document)?;
    let compressed = compress(&json)?;

    let mut payload = Vec::with_capacity(1 + compressed.len());
    payload.push(TOKEN_VERSION);
    payload.extend_from_slice(&compressed);

    Ok(encode_base64url(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapmenu::{MenuCategory, MenuItem};

    fn sample_document() -> MenuDocument {
        let mut document = MenuDocument::new("Cafe Sol");
        let mut drinks = MenuCategory::new("Drinks");
        drinks.items.push(MenuItem::new("Latte", "$4.00"));
        document.categories.push(drinks);
        document
    }

    #[test]
    fn test_encode_base64url_no_padding() {
        let encoded = encode_base64url(b"hello world");
        assert_eq!(encoded, "aGVsbG8gd29ybGQ");
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode(&sample_document()).unwrap();
        assert!(!token.is_empty());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let document = sample_document();
        assert_eq!(encode(&document).unwrap(), encode(&document).unwrap());
    }

    #[test]
    fn test_payload_starts_with_version() {
        let token = encode(&sample_document()).unwrap();
        let payload = URL_SAFE_NO_PAD.decode(token).unwrap();
        assert_eq!(payload[0], TOKEN_VERSION);
    }

    #[test]
    fn test_serialization_omits_empty_optionals() {
        let json = serialize_document(&sample_document()).unwrap();
        let text = String::from_utf8(json).unwrap();
        assert!(text.contains("\"restaurantName\""));
        // No document description, no item description, no tags
        assert!(!text.contains("description"));
        assert!(!text.contains("tags"));
    }
}
