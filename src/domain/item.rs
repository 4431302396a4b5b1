use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Category, HexColor, ImageRef, ItemId, Style};

/// A single tagged entry in the wardrobe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    pub id: ItemId,
    pub image: ImageRef,
    pub category: Category,
    pub color: HexColor,
    pub style: Style,
    pub created_at: NaiveDateTime,
}

/// User-supplied attributes of a [`ClothingItem`].
///
/// The wardrobe store attaches the identifier and creation timestamp when the
/// item is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewClothingItem {
    pub image: ImageRef,
    pub category: Category,
    pub color: HexColor,
    pub style: Style,
}
