use serde::{Deserialize, Serialize};

/// A single dish or drink entry.
///
/// `price` is free text rather than a number: it preserves whatever the
/// paper menu shows, including currency symbols, decimals, and wording
/// like "market price".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// May be empty. Empty descriptions are omitted from the wire to keep
    /// tokens short; omission reads back as the empty string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub price: String,
    /// Ordered labels such as "Spicy", "GF", or "Vegan". Absent tags are
    /// distinct from an explicitly empty list and both round-trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A named group of items. Item order is display order and round-trips
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The canonical structured menu.
///
/// There is no storage layer and no identity beyond content: the encoded
/// share token is the document's only durable representation. Every
/// textual field may contain arbitrary Unicode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub restaurant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub categories: Vec<MenuCategory>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        MenuItem {
            name: name.into(),
            description: String::new(),
            price: price.into(),
            tags: None,
        }
    }
}

impl MenuCategory {
    pub fn new(name: impl Into<String>) -> Self {
        MenuCategory {
            name: name.into(),
            items: Vec::new(),
        }
    }
}

impl MenuDocument {
    pub fn new(restaurant_name: impl Into<String>) -> Self {
        MenuDocument {
            restaurant_name: restaurant_name.into(),
            description: None,
            categories: Vec::new(),
        }
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
