//! Editing operations on a menu document.
//!
//! The editing surface is a closed set of explicit, index-addressed
//! operations rather than an open-ended keyed mutation: the data model is
//! fixed, so every legal edit has a named method here. Indices refer to
//! the current display order.

use crate::menu::{MenuCategory, MenuDocument, MenuItem};

/// Errors for index-addressed editing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Category index {0} is out of range")]
    CategoryOutOfRange(usize),

    #[error("Item index {item} is out of range in category {category}")]
    ItemOutOfRange { category: usize, item: usize },
}

/// Split comma-separated tag text into tag labels.
///
/// Entries are trimmed and empty entries dropped. This is the editing
/// boundary for tag hygiene: the codec transmits whatever list it is
/// given and never filters.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

impl MenuDocument {
    pub fn rename_restaurant(&mut self, name: impl Into<String>) {
        self.restaurant_name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Append a new empty category; returns its index.
    pub fn add_category(&mut self, name: impl Into<String>) -> usize {
        self.categories.push(MenuCategory::new(name));
        self.categories.len() - 1
    }

    pub fn rename_category(
        &mut self,
        category: usize,
        name: impl Into<String>,
    ) -> Result<(), EditError> {
        self.category_mut(category)?.name = name.into();
        Ok(())
    }

    /// Remove a category and everything in it, returning it.
    pub fn remove_category(&mut self, category: usize) -> Result<MenuCategory, EditError> {
        if category >= self.categories.len() {
            return Err(EditError::CategoryOutOfRange(category));
        }
        Ok(self.categories.remove(category))
    }

    /// Move a category so that it ends up at index `to`.
    pub fn move_category(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        if from >= self.categories.len() {
            return Err(EditError::CategoryOutOfRange(from));
        }
        if to >= self.categories.len() {
            return Err(EditError::CategoryOutOfRange(to));
        }
        let moved = self.categories.remove(from);
        self.categories.insert(to, moved);
        Ok(())
    }

    /// Append an item to a category; returns the item's index.
    pub fn add_item(&mut self, category: usize, item: MenuItem) -> Result<usize, EditError> {
        let items = &mut self.category_mut(category)?.items;
        items.push(item);
        Ok(items.len() - 1)
    }

    pub fn remove_item(&mut self, category: usize, item: usize) -> Result<MenuItem, EditError> {
        let items = &mut self.category_mut(category)?.items;
        if item >= items.len() {
            return Err(EditError::ItemOutOfRange { category, item });
        }
        Ok(items.remove(item))
    }

    /// Move an item within its category so that it ends up at index `to`.
    pub fn move_item(&mut self, category: usize, from: usize, to: usize) -> Result<(), EditError> {
        let items = &mut self.category_mut(category)?.items;
        if from >= items.len() {
            return Err(EditError::ItemOutOfRange {
                category,
                item: from,
            });
        }
        if to >= items.len() {
            return Err(EditError::ItemOutOfRange { category, item: to });
        }
        let moved = items.remove(from);
        items.insert(to, moved);
        Ok(())
    }

    pub fn set_item_name(
        &mut self,
        category: usize,
        item: usize,
        name: impl Into<String>,
    ) -> Result<(), EditError> {
        self.item_mut(category, item)?.name = name.into();
        Ok(())
    }

    pub fn set_item_description(
        &mut self,
        category: usize,
        item: usize,
        description: impl Into<String>,
    ) -> Result<(), EditError> {
        self.item_mut(category, item)?.description = description.into();
        Ok(())
    }

    pub fn set_item_price(
        &mut self,
        category: usize,
        item: usize,
        price: impl Into<String>,
    ) -> Result<(), EditError> {
        self.item_mut(category, item)?.price = price.into();
        Ok(())
    }

    /// Replace an item's tags from comma-separated free text.
    ///
    /// Tags are cleaned with [`parse_tags`]; text with no usable entries
    /// leaves an explicitly empty list rather than reverting to absent.
    pub fn set_item_tags_from_text(
        &mut self,
        category: usize,
        item: usize,
        text: &str,
    ) -> Result<(), EditError> {
        self.item_mut(category, item)?.tags = Some(parse_tags(text));
        Ok(())
    }

    fn category_mut(&mut self, category: usize) -> Result<&mut MenuCategory, EditError> {
        self.categories
            .get_mut(category)
            .ok_or(EditError::CategoryOutOfRange(category))
    }

    fn item_mut(&mut self, category: usize, item: usize) -> Result<&mut MenuItem, EditError> {
        self.category_mut(category)?
            .items
            .get_mut(item)
            .ok_or(EditError::ItemOutOfRange { category, item })
    }
}
