use crate::encode::TOKEN_VERSION;
use crate::error::{Result, ShareLinkError};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use snapmenu::MenuDocument;
use std::io::Read;

/// Upper bound on the decompressed document size.
///
/// Decompression is the only operation whose cost scales with
/// attacker-controlled input, so a token claiming to inflate past this
/// bound is rejected before the bytes are materialized. Real menus sit
/// around a few kilobytes.
pub const MAX_DOCUMENT_BYTES: usize = 1 << 20;

/// Decompress a zstd stream, refusing output larger than `limit` bytes.
fn decompress_bounded(compressed: &[u8], limit: usize) -> Result<Vec<u8>> {
    let decoder =
        zstd::stream::read::Decoder::new(compressed).map_err(ShareLinkError::Decompress)?;

    let mut json = Vec::new();
    let mut bounded = decoder.take(limit as u64 + 1);
    bounded
        .read_to_end(&mut json)
        .map_err(ShareLinkError::Decompress)?;

    if json.len() > limit {
        return Err(ShareLinkError::DocumentTooLarge { limit });
    }
    Ok(json)
}

/// Decode a share token back into a menu document.
///
/// Inverse of [`encode`](crate::encode): base64url → version check →
/// bounded decompression → JSON parse into the exact document shape.
///
/// Recovery is all-or-nothing. A token that decompresses but whose JSON
/// is missing a required field (restaurant name, a category name, an item
/// name or price) is fully invalid; nothing is patched with defaults.
///
/// # Errors
///
/// Every input-quality failure (the empty token, characters outside the
/// base64url alphabet, a wrong version byte, a corrupt or truncated
/// stream, a shape mismatch) comes back as an error value. Decoding
/// never panics on untrusted input.
pub fn decode(token: &str) -> Result<MenuDocument> {
    if token.is_empty() {
        return Err(ShareLinkError::EmptyToken);
    }

    let payload = URL_SAFE_NO_PAD.decode(token)?;

    let (version, compressed) = payload
        .split_first()
        .ok_or(ShareLinkError::TruncatedToken)?;
    if *version != TOKEN_VERSION {
        return Err(ShareLinkError::UnsupportedVersion(*version));
    }

    let json = decompress_bounded(compressed, MAX_DOCUMENT_BYTES)?;
    Ok(serde_json::from_slice(&json)?)
}
