//! Outfit matching: eligibility filtering, category pools and the
//! clash-avoidance heuristic.
//!
//! Pools are recomputed from the supplied collection on every call, so the
//! selection is always uniform over the wardrobe as it currently stands. All
//! randomness flows through [`Picker`], which keeps the branching logic
//! deterministic under test.

use rand::Rng;
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::domain::item::ClothingItem;
use crate::domain::outfit::Outfit;
use crate::domain::types::{Category, Mood};

/// Source of the random draws made while assembling an outfit.
pub trait Picker {
    /// Uniform index into a pool of `len` elements.
    ///
    /// Callers only invoke this with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

/// Picker backed by the thread-local random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn coin(&mut self) -> bool {
        rand::rng().random_bool(0.5)
    }
}

/// Which required outfit slot had no eligible items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSlots {
    Tops,
    Bottoms,
    TopsAndBottoms,
}

impl Display for MissingSlots {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::TopsAndBottoms => "tops and bottoms",
        };
        write!(f, "{text}")
    }
}

/// Reportable outcome when no outfit can be formed.
///
/// Running out of eligible clothes is an ordinary result, not an exceptional
/// condition; routes turn it into a user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("not enough clothes for \"{}\": no eligible {missing}", .mood.label())]
    InsufficientItems { mood: Mood, missing: MissingSlots },
}

fn pick_from<'a, P: Picker + ?Sized>(
    picker: &mut P,
    pool: &[&'a ClothingItem],
) -> &'a ClothingItem {
    pool[picker.pick_index(pool.len())]
}

/// Assembles an outfit for `mood` from the supplied wardrobe collection.
///
/// Items whose style is outside the mood's allowed set are excluded up front.
/// A valid outfit needs at least one eligible top and bottom; outerwear and
/// shoes are optional extras. Unless the mood is [`Mood::Experimental`], the
/// bottom pool is first narrowed to colors that do not clash with the chosen
/// top (neutrals always pass), falling back to the full pool rather than
/// failing on color alone.
pub fn match_outfit<P: Picker + ?Sized>(
    items: &[ClothingItem],
    mood: Mood,
    picker: &mut P,
) -> Result<Outfit, MatchError> {
    let eligible: Vec<&ClothingItem> = items.iter().filter(|i| mood.allows(i.style)).collect();

    let pool = |category: Category| -> Vec<&ClothingItem> {
        eligible
            .iter()
            .copied()
            .filter(|i| i.category == category)
            .collect()
    };

    let tops = pool(Category::Top);
    let bottoms = pool(Category::Bottom);
    let outerwear = pool(Category::Outerwear);
    let shoes = pool(Category::Shoes);

    let missing = match (tops.is_empty(), bottoms.is_empty()) {
        (true, true) => Some(MissingSlots::TopsAndBottoms),
        (true, false) => Some(MissingSlots::Tops),
        (false, true) => Some(MissingSlots::Bottoms),
        (false, false) => None,
    };
    if let Some(missing) = missing {
        return Err(MatchError::InsufficientItems { mood, missing });
    }

    let top = pick_from(picker, &tops);

    let bottom_pool = if mood == Mood::Experimental {
        bottoms
    } else {
        let narrowed: Vec<&ClothingItem> = bottoms
            .iter()
            .copied()
            .filter(|b| b.color != top.color || b.color.is_neutral())
            .collect();
        if narrowed.is_empty() { bottoms } else { narrowed }
    };
    let bottom = pick_from(picker, &bottom_pool);

    let outerwear = if !outerwear.is_empty() && (mood == Mood::Professional || picker.coin()) {
        Some(pick_from(picker, &outerwear).clone())
    } else {
        None
    };

    let shoes = if shoes.is_empty() {
        None
    } else {
        Some(pick_from(picker, &shoes).clone())
    };

    Ok(Outfit {
        top: top.clone(),
        bottom: bottom.clone(),
        outerwear,
        shoes,
    })
}
