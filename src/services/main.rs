use crate::domain::item::ClothingItem;
use crate::repository::WardrobeReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the index page.
///
/// Fetches the wardrobe collection in insertion order. Repository errors are
/// translated into `ServiceError` so that the HTTP route can remain a thin
/// wrapper.
pub fn show_index<R>(repo: &R) -> ServiceResult<Vec<ClothingItem>>
where
    R: WardrobeReader,
{
    match repo.list_items() {
        Ok(items) => Ok(items),
        Err(e) => {
            log::error!("Failed to list wardrobe items: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Category, HexColor, ImageRef, ItemId, Style};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_item(id: &str) -> ClothingItem {
        ClothingItem {
            id: ItemId::new(id).unwrap(),
            image: ImageRef::new("data:image/png;base64,AAAA").unwrap(),
            category: Category::Top,
            color: HexColor::new("#000000").unwrap(),
            style: Style::Casual,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn returns_items_in_insertion_order() {
        let repo = TestRepository::new(vec![sample_item("a"), sample_item("b")]);

        let items = show_index(&repo).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].id, "b");
    }
}
