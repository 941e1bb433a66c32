// ============================================================================
// Menu Core - Menu Document Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Nested, ordered menu document (menu -> categories -> items)
// ============================================================================

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use thiserror::Error;
use validator::{Validate, ValidationError};

use super::ids::{CategoryId, ItemId, MenuId};

/// Menu document being edited.
///
/// Fields are read through accessors only; every change goes through
/// [`crate::engine`], which returns a fresh document and leaves its input
/// untouched. Sequence order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MenuDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<MenuId>,

    #[validate(custom(function = "validate_not_blank"))]
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) description: String,

    #[validate(nested)]
    #[serde(default)]
    pub(crate) categories: Vec<Category>,
}

/// Ordered group of items within a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub(crate) id: CategoryId,
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) description: String,

    #[validate(nested)]
    #[serde(default)]
    pub(crate) items: Vec<Item>,
}

/// Single orderable menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) description: String,

    /// Decimal amount kept as typed; only checked when the menu is saved
    #[validate(custom(function = "validate_price"))]
    pub(crate) price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<String>,
}

/// Identity clash found by [`MenuDocument::check_structure`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureViolation {
    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(CategoryId),

    #[error("Duplicate item id {item} in category {category}")]
    DuplicateItemId { category: CategoryId, item: ItemId },
}

impl MenuDocument {
    /// Rebuild a document from persisted state
    pub fn hydrate(
        id: Option<MenuId>,
        name: String,
        description: String,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            categories,
        }
    }

    /// Same document under a persistence-assigned id
    pub fn with_id(mut self, id: MenuId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<&MenuId> {
        self.id.as_ref()
    }

    /// Never persisted yet
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn category_position(&self, id: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| &c.id == id)
    }

    pub fn item(&self, category_id: &CategoryId, item_id: &ItemId) -> Option<&Item> {
        self.category(category_id)?.item(item_id)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// True when any category already holds an item with this id
    pub fn contains_item_id(&self, item_id: &ItemId) -> bool {
        self.categories.iter().any(|c| c.item(item_id).is_some())
    }

    /// Verify id uniqueness at both nesting levels.
    ///
    /// Documents produced by the engine always pass; hydrated or
    /// deserialized ones may not.
    pub fn check_structure(&self) -> Result<(), StructureViolation> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(StructureViolation::DuplicateCategoryId(category.id.clone()));
            }

            let mut item_ids = HashSet::new();
            for item in &category.items {
                if !item_ids.insert(&item.id) {
                    return Err(StructureViolation::DuplicateItemId {
                        category: category.id.clone(),
                        item: item.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Category {
    pub fn new(id: CategoryId, name: String, description: String, items: Vec<Item>) -> Self {
        Self {
            id,
            name,
            description,
            items,
        }
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn item_position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }
}

impl Item {
    pub fn new(
        id: ItemId,
        name: String,
        description: String,
        price: String,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("Please enter a menu name")));
    }
    Ok(())
}

/// Non-negative decimal with at most two fraction digits ("5", "5.9", "5.99")
fn validate_price(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };

    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = fraction.map_or(true, |f| {
        (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit())
    });

    if whole_ok && fraction_ok {
        Ok(())
    } else {
        Err(ValidationError::new("price")
            .with_message(Cow::Owned(format!("Invalid price: {:?}", value))))
    }
}
