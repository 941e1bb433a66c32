//! Edit intents and their dispatch onto the mutation engine

use serde::{Deserialize, Serialize};

use super::edit::{CategoryEdit, Direction, ItemEdit, MenuEdit};
use super::id_generator::IdGenerator;
use super::mutations;
use crate::domain::{CategoryId, ItemId, MenuDocument};

/// One discrete change requested by the editor front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    SetMenuField {
        edit: MenuEdit,
    },
    AddCategory,
    RemoveCategory {
        category_id: CategoryId,
    },
    SetCategoryField {
        category_id: CategoryId,
        edit: CategoryEdit,
    },
    MoveCategory {
        category_id: CategoryId,
        direction: Direction,
    },
    AddItem {
        category_id: CategoryId,
    },
    RemoveItem {
        category_id: CategoryId,
        item_id: ItemId,
    },
    SetItemField {
        category_id: CategoryId,
        item_id: ItemId,
        edit: ItemEdit,
    },
    MoveItem {
        category_id: CategoryId,
        item_id: ItemId,
        direction: Direction,
    },
}

/// Entity minted by an add intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreatedEntity {
    Category { category_id: CategoryId },
    Item { category_id: CategoryId, item_id: ItemId },
}

/// Result of applying one intent
#[derive(Debug, Clone)]
pub struct Applied {
    pub document: MenuDocument,
    pub created: Option<CreatedEntity>,
    /// False when the intent was a structural no-op
    pub changed: bool,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SetMenuField { .. } => "set_menu_field",
            Intent::AddCategory => "add_category",
            Intent::RemoveCategory { .. } => "remove_category",
            Intent::SetCategoryField { .. } => "set_category_field",
            Intent::MoveCategory { .. } => "move_category",
            Intent::AddItem { .. } => "add_item",
            Intent::RemoveItem { .. } => "remove_item",
            Intent::SetItemField { .. } => "set_item_field",
            Intent::MoveItem { .. } => "move_item",
        }
    }
}

pub fn apply_intent(doc: &MenuDocument, intent: Intent, ids: &dyn IdGenerator) -> Applied {
    let (document, created) = match intent {
        Intent::SetMenuField { edit } => (mutations::set_document_field(doc, edit), None),
        Intent::AddCategory => {
            let (next, category_id) = mutations::add_category(doc, ids);
            (next, Some(CreatedEntity::Category { category_id }))
        }
        Intent::RemoveCategory { category_id } => {
            (mutations::remove_category(doc, &category_id), None)
        }
        Intent::SetCategoryField { category_id, edit } => {
            (mutations::set_category_field(doc, &category_id, edit), None)
        }
        Intent::MoveCategory { category_id, direction } => {
            (mutations::move_category(doc, &category_id, direction), None)
        }
        Intent::AddItem { category_id } => {
            let (next, item_id) = mutations::add_item(doc, &category_id, ids);
            let created = item_id.map(|item_id| CreatedEntity::Item { category_id, item_id });
            (next, created)
        }
        Intent::RemoveItem { category_id, item_id } => {
            (mutations::remove_item(doc, &category_id, &item_id), None)
        }
        Intent::SetItemField { category_id, item_id, edit } => {
            (mutations::set_item_field(doc, &category_id, &item_id, edit), None)
        }
        Intent::MoveItem { category_id, item_id, direction } => {
            (mutations::move_item(doc, &category_id, &item_id, direction), None)
        }
    };

    let changed = &document != doc;
    Applied {
        document,
        created,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::id_generator::SequentialIdGenerator;

    #[test]
    fn test_intent_wire_format() {
        let intent: Intent = serde_json::from_str(
            r#"{"type":"set_item_field","category_id":"cat_1","item_id":"item_2","edit":{"field":"name","value":"Soup"}}"#,
        )
        .unwrap();
        assert_eq!(
            intent,
            Intent::SetItemField {
                category_id: CategoryId::from("cat_1"),
                item_id: ItemId::from("item_2"),
                edit: ItemEdit::Name("Soup".to_string()),
            }
        );

        let add: Intent = serde_json::from_str(r#"{"type":"add_category"}"#).unwrap();
        assert_eq!(add, Intent::AddCategory);

        let mv: Intent =
            serde_json::from_str(r#"{"type":"move_category","category_id":"cat_1","direction":"down"}"#).unwrap();
        assert_eq!(mv.name(), "move_category");
    }

    #[test]
    fn test_apply_reports_created_ids() {
        let ids = SequentialIdGenerator::new();
        let doc = mutations::seeded_document(&ids);

        let applied = apply_intent(&doc, Intent::AddCategory, &ids);
        assert!(applied.changed);
        let Some(CreatedEntity::Category { category_id }) = applied.created else {
            panic!("expected a created category");
        };

        let applied = apply_intent(&applied.document, Intent::AddItem { category_id: category_id.clone() }, &ids);
        match applied.created {
            Some(CreatedEntity::Item { category_id: owner, item_id }) => {
                assert_eq!(owner, category_id);
                assert!(applied.document.item(&category_id, &item_id).is_some());
            }
            other => panic!("expected a created item, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_noop_is_unchanged() {
        let ids = SequentialIdGenerator::new();
        let doc = mutations::seeded_document(&ids);
        let first = doc.categories()[0].id().clone();

        let applied = apply_intent(
            &doc,
            Intent::MoveCategory { category_id: first, direction: Direction::Up },
            &ids,
        );
        assert!(!applied.changed);
        assert!(applied.created.is_none());
        assert_eq!(applied.document, doc);

        let applied = apply_intent(&doc, Intent::AddItem { category_id: CategoryId::from("nope") }, &ids);
        assert!(!applied.changed);
        assert!(applied.created.is_none());
    }
}
