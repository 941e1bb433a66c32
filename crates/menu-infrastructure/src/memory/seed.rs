//! Sample menu served by the demo repository

use menu_core::domain::{Category, CategoryId, Item, ItemId, MenuDocument, MenuId};
use menu_shared::constants::SAMPLE_MENU_ID;

pub fn sample_menu() -> MenuDocument {
    MenuDocument::hydrate(
        Some(MenuId::from(SAMPLE_MENU_ID)),
        "Sample Menu".to_string(),
        "A delicious menu with various dishes.".to_string(),
        vec![
            Category::new(
                CategoryId::from("cat_1"),
                "Appetizers".to_string(),
                "Start your meal with these delicious options".to_string(),
                vec![
                    Item::new(
                        ItemId::from("item_1"),
                        "Garlic Bread".to_string(),
                        "Toasted bread with garlic butter".to_string(),
                        "5.99".to_string(),
                        Some("https://images.unsplash.com/photo-1500672860114-9e913f298978".to_string()),
                    ),
                    Item::new(
                        ItemId::from("item_2"),
                        "Mozzarella Sticks".to_string(),
                        "Breaded and deep-fried mozzarella cheese".to_string(),
                        "7.99".to_string(),
                        None,
                    ),
                ],
            ),
            Category::new(
                CategoryId::from("cat_2"),
                "Main Courses".to_string(),
                "Hearty meals for your satisfaction".to_string(),
                vec![Item::new(
                    ItemId::from("item_3"),
                    "Pasta Carbonara".to_string(),
                    "Classic Italian pasta with eggs, cheese, and pancetta".to_string(),
                    "14.99".to_string(),
                    None,
                )],
            ),
        ],
    )
}
