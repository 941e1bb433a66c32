//! Editor-wide constants

pub const DEFAULT_CATEGORY_NAME: &str = "New Category";
pub const DEFAULT_ITEM_NAME: &str = "New Item";
pub const DEFAULT_ITEM_PRICE: &str = "0.00";

pub const CATEGORY_ID_PREFIX: &str = "cat";
pub const ITEM_ID_PREFIX: &str = "item";
pub const MENU_ID_PREFIX: &str = "menu";

pub const SAMPLE_MENU_ID: &str = "menu_sample";
