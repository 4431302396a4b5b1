use crate::domain::item::{ClothingItem, NewClothingItem};
use crate::domain::types::ItemId;
use crate::repository::WardrobeWriter;

use super::{ServiceError, ServiceResult};

/// Core business logic for adding a wardrobe item.
///
/// The caller supplies fully-validated attributes; the store attaches the id
/// and timestamp. Repository errors are translated into `ServiceError`.
pub fn add_item<R>(new_item: NewClothingItem, repo: &R) -> ServiceResult<ClothingItem>
where
    R: WardrobeWriter,
{
    match repo.add_item(new_item) {
        Ok(item) => Ok(item),
        Err(e) => {
            log::error!("Failed to add wardrobe item: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for removing a wardrobe item by id.
///
/// Returns the number of removed items; removing an id that is not present is
/// a no-op, not an error.
pub fn remove_item<R>(id: &str, repo: &R) -> ServiceResult<usize>
where
    R: WardrobeWriter,
{
    let id = match ItemId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.remove_item(&id) {
        Ok(removed) => Ok(removed),
        Err(e) => {
            log::error!("Failed to remove wardrobe item {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
