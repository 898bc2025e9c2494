//! Share-link builder: glue between the codec and the address bar.

use crate::encode::encode;
use crate::error::Result;
use snapmenu::MenuDocument;
use std::fmt;
use url::Url;

/// The single recognized query parameter carrying the menu token. Any
/// other parameters on an incoming address are ignored.
pub const MENU_PARAM: &str = "m";

/// Addresses longer than this degrade dense QR encoding on some scanners.
/// Advisory only; building never fails or truncates because of length.
pub const QR_ADVISORY_LIMIT: usize = 2500;

/// A full share address plus its derived QR-capacity signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareAddress {
    url: String,
}

impl ShareAddress {
    /// The complete address, ready to hand to a QR renderer as opaque
    /// text.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.url
    }

    /// True when the address has outgrown what dense QR symbols and older
    /// scanners handle comfortably.
    pub fn exceeds_qr_capacity(&self) -> bool {
        self.url.len() > QR_ADVISORY_LIMIT
    }
}

impl fmt::Display for ShareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Build the shareable address for a document: the base address with the
/// encoded token appended as the `m` query parameter.
///
/// # Errors
///
/// Returns `ShareLinkError` if the base address does not parse or the
/// document fails to encode.
pub fn build(document: &MenuDocument, base: &str) -> Result<ShareAddress> {
    let token = encode(document)?;
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair(MENU_PARAM, &token);
    Ok(ShareAddress { url: url.into() })
}

/// Pull the raw token out of an incoming address, if present.
///
/// Extraction does not decode; hand the result to
/// [`decode`](crate::decode). Returns `None` for unparseable addresses
/// and for addresses without the menu parameter.
pub fn extract(address: &str) -> Option<String> {
    let url = Url::parse(address).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == MENU_PARAM)
        .map(|(_, value)| value.into_owned())
}
