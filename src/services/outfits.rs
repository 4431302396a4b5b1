use crate::domain::matcher::{self, MatchError, Picker};
use crate::domain::outfit::Outfit;
use crate::domain::types::Mood;
use crate::repository::WardrobeReader;

use super::{ServiceError, ServiceResult};

/// Outcome of a suggestion request: an outfit, or the ordinary
/// not-enough-clothes failure the UI presents to the user.
pub type MatchOutcome = Result<Outfit, MatchError>;

/// Core business logic for the outfit suggestion flow.
///
/// Fetches the wardrobe as it currently stands and runs the matcher over it.
/// Only repository failures surface as `ServiceError`; an unmatchable
/// wardrobe travels in the `Ok` arm because it is a normal result.
pub fn suggest_outfit<R, P>(mood: Mood, repo: &R, picker: &mut P) -> ServiceResult<MatchOutcome>
where
    R: WardrobeReader,
    P: Picker + ?Sized,
{
    let items = match repo.list_items() {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list wardrobe items: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(matcher::match_outfit(&items, mood, picker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ClothingItem;
    use crate::domain::matcher::{MissingSlots, RandomPicker};
    use crate::domain::types::{Category, HexColor, ImageRef, ItemId, Style};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn item(id: &str, category: Category, style: Style) -> ClothingItem {
        ClothingItem {
            id: ItemId::new(id).unwrap(),
            image: ImageRef::new("data:image/png;base64,AAAA").unwrap(),
            category,
            color: HexColor::new("#808080").unwrap(),
            style,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn returns_an_outfit_when_the_wardrobe_suffices() {
        let repo = TestRepository::new(vec![
            item("t1", Category::Top, Style::Formal),
            item("b1", Category::Bottom, Style::Formal),
        ]);

        let outcome = suggest_outfit(Mood::Professional, &repo, &mut RandomPicker).unwrap();

        let outfit = outcome.unwrap();
        assert_eq!(outfit.top.id, "t1");
        assert_eq!(outfit.bottom.id, "b1");
    }

    #[test]
    fn reports_the_failure_as_an_ordinary_outcome() {
        let repo = TestRepository::new(vec![item("t1", Category::Top, Style::Casual)]);

        let outcome = suggest_outfit(Mood::Relaxed, &repo, &mut RandomPicker).unwrap();

        assert_eq!(
            outcome.unwrap_err(),
            MatchError::InsufficientItems {
                mood: Mood::Relaxed,
                missing: MissingSlots::Bottoms,
            }
        );
    }
}
