// ============================================================================
// Menu Core - Mutation Engine
// File: crates/menu-core/src/engine/mutations.rs
// Description: Structural edits over menu documents
// ============================================================================
//! Every operation takes the current document by reference and returns the
//! next one. Unknown ids and boundary moves return an equal copy.

use menu_shared::constants::{
    CATEGORY_ID_PREFIX, DEFAULT_CATEGORY_NAME, DEFAULT_ITEM_NAME, DEFAULT_ITEM_PRICE,
    ITEM_ID_PREFIX,
};

use super::edit::{CategoryEdit, Direction, ItemEdit, MenuEdit};
use super::id_generator::IdGenerator;
use crate::domain::{Category, CategoryId, Item, ItemId, MenuDocument};

/// Brand-new menu: blank name, one empty default category
pub fn seeded_document(ids: &dyn IdGenerator) -> MenuDocument {
    let (document, _) = add_category(&MenuDocument::default(), ids);
    document
}

pub fn set_document_field(doc: &MenuDocument, edit: MenuEdit) -> MenuDocument {
    let mut next = doc.clone();
    match edit {
        MenuEdit::Name(value) => next.name = value,
        MenuEdit::Description(value) => next.description = value,
    }
    next
}

/// Append an empty category and return its id
pub fn add_category(doc: &MenuDocument, ids: &dyn IdGenerator) -> (MenuDocument, CategoryId) {
    let id = fresh_id(ids, CATEGORY_ID_PREFIX, |candidate| {
        doc.category(&CategoryId::from(candidate)).is_some()
    });
    let id = CategoryId::from(id);

    let mut next = doc.clone();
    next.categories.push(Category::new(
        id.clone(),
        DEFAULT_CATEGORY_NAME.to_string(),
        String::new(),
        Vec::new(),
    ));
    (next, id)
}

/// Drop a category with all its items. Removing the last one is allowed.
pub fn remove_category(doc: &MenuDocument, category_id: &CategoryId) -> MenuDocument {
    let Some(index) = doc.category_position(category_id) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    next.categories.remove(index);
    next
}

pub fn set_category_field(
    doc: &MenuDocument,
    category_id: &CategoryId,
    edit: CategoryEdit,
) -> MenuDocument {
    let Some(index) = doc.category_position(category_id) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    let category = &mut next.categories[index];
    match edit {
        CategoryEdit::Name(value) => category.name = value,
        CategoryEdit::Description(value) => category.description = value,
    }
    next
}

pub fn move_category(
    doc: &MenuDocument,
    category_id: &CategoryId,
    direction: Direction,
) -> MenuDocument {
    let Some(index) = doc.category_position(category_id) else {
        return doc.clone();
    };
    let Some(target) = direction.neighbour(index, doc.categories.len()) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    next.categories.swap(index, target);
    next
}

/// Append a default item to a category and return its id.
///
/// The id is kept clear of every item in the document, not just the
/// target category, so order lines can reference it on its own.
pub fn add_item(
    doc: &MenuDocument,
    category_id: &CategoryId,
    ids: &dyn IdGenerator,
) -> (MenuDocument, Option<ItemId>) {
    let Some(index) = doc.category_position(category_id) else {
        return (doc.clone(), None);
    };

    let id = fresh_id(ids, ITEM_ID_PREFIX, |candidate| {
        doc.contains_item_id(&ItemId::from(candidate))
    });
    let id = ItemId::from(id);

    let mut next = doc.clone();
    next.categories[index].items.push(Item::new(
        id.clone(),
        DEFAULT_ITEM_NAME.to_string(),
        String::new(),
        DEFAULT_ITEM_PRICE.to_string(),
        None,
    ));
    (next, Some(id))
}

pub fn remove_item(doc: &MenuDocument, category_id: &CategoryId, item_id: &ItemId) -> MenuDocument {
    let Some((category_index, item_index)) = locate_item(doc, category_id, item_id) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    next.categories[category_index].items.remove(item_index);
    next
}

/// Replace one item field. Prices are stored as typed.
pub fn set_item_field(
    doc: &MenuDocument,
    category_id: &CategoryId,
    item_id: &ItemId,
    edit: ItemEdit,
) -> MenuDocument {
    let Some((category_index, item_index)) = locate_item(doc, category_id, item_id) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    let item = &mut next.categories[category_index].items[item_index];
    match edit {
        ItemEdit::Name(value) => item.name = value,
        ItemEdit::Description(value) => item.description = value,
        ItemEdit::Price(value) => item.price = value,
        ItemEdit::Image(value) => item.image = value,
    }
    next
}

/// Swap an item with its neighbour inside the same category
pub fn move_item(
    doc: &MenuDocument,
    category_id: &CategoryId,
    item_id: &ItemId,
    direction: Direction,
) -> MenuDocument {
    let Some((category_index, item_index)) = locate_item(doc, category_id, item_id) else {
        return doc.clone();
    };
    let len = doc.categories[category_index].items.len();
    let Some(target) = direction.neighbour(item_index, len) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    next.categories[category_index].items.swap(item_index, target);
    next
}

fn locate_item(doc: &MenuDocument, category_id: &CategoryId, item_id: &ItemId) -> Option<(usize, usize)> {
    let category_index = doc.category_position(category_id)?;
    let item_index = doc.categories[category_index].item_position(item_id)?;
    Some((category_index, item_index))
}

fn fresh_id(ids: &dyn IdGenerator, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = ids.next_id(prefix);
        if !taken(&candidate) {
            return candidate;
        }
        tracing::debug!("Generated id {} already in use, drawing again", candidate);
    }
}
