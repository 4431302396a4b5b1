use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::item::ClothingItem;
use crate::domain::types::{Category, HexColor, ImageRef, ItemId, Style, TypeConstraintError};

/// Persistence record for a single wardrobe entry.
///
/// Mirrors the stored JSON document: enumerations as plain strings, creation
/// time as epoch milliseconds. Conversion into the domain type revalidates
/// every field so the matcher never sees out-of-enum data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredItem {
    pub id: String,
    pub image: String,
    pub category: String,
    pub color: String,
    pub style: String,
    pub timestamp: i64,
}

impl TryFrom<StoredItem> for ClothingItem {
    type Error = TypeConstraintError;

    fn try_from(item: StoredItem) -> Result<Self, Self::Error> {
        let created_at = DateTime::from_timestamp_millis(item.timestamp)
            .ok_or_else(|| {
                TypeConstraintError::InvalidValue(format!("timestamp: {}", item.timestamp))
            })?
            .naive_utc();

        Ok(Self {
            id: ItemId::new(item.id)?,
            image: ImageRef::new(item.image)?,
            category: Category::try_from(item.category)?,
            color: HexColor::new(item.color)?,
            style: Style::try_from(item.style)?,
            created_at,
        })
    }
}

impl From<&ClothingItem> for StoredItem {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            image: item.image.as_str().to_string(),
            category: item.category.as_str().to_string(),
            color: item.color.as_str().to_string(),
            style: item.style.as_str().to_string(),
            timestamp: item.created_at.and_utc().timestamp_millis(),
        }
    }
}
