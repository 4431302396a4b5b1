use serde::Serialize;

use crate::domain::item::ClothingItem;

/// The combination of items returned by a successful match.
///
/// A transient display value: produced by the matcher, rendered once and
/// replaced on the next request. Top and bottom are always present; the other
/// slots depend on pool contents and the mood's layering rules. Items are
/// cloned out of the wardrobe so the outfit outlives the store's lock.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Outfit {
    pub top: ClothingItem,
    pub bottom: ClothingItem,
    pub outerwear: Option<ClothingItem>,
    pub shoes: Option<ClothingItem>,
}
