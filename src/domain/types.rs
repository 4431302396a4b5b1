//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers, colors and the closed enumerations are enforced at the
//! boundary. The matcher never has to defend against out-of-enum data.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A color value was not a `#RRGGBB` hex triplet.
    #[error("color must be a #RRGGBB hex value, got {0}")]
    InvalidColor(String),
    /// Catch-all for values outside a closed enumeration.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for opaque non-empty strings.
macro_rules! opaque_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

opaque_string_newtype!(ItemId, "Unique identifier for a clothing item.", "item id");
opaque_string_newtype!(
    ImageRef,
    "Opaque reference to displayable image data, usually a data URI.",
    "image reference"
);

impl ItemId {
    /// Generates a fresh globally-unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// A `#RRGGBB` color value, normalised to uppercase.
///
/// Only exact equality matters to the matcher, so normalising the casing at
/// construction keeps comparisons between user-entered values exact.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parses and normalises a `#RRGGBB` value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_ascii_uppercase();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(TypeConstraintError::InvalidColor(trimmed));
        };
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeConstraintError::InvalidColor(trimmed));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this color is treated as compatible with any other color.
    ///
    /// Pure black and pure white are the only neutrals.
    pub fn is_neutral(&self) -> bool {
        self.0 == "#000000" || self.0 == "#FFFFFF"
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for HexColor {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// Outfit slot a clothing item can fill.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
    Shoes,
}

impl Category {
    /// All categories, in outfit-slot order.
    pub const ALL: [Category; 4] = [Self::Top, Self::Bottom, Self::Outerwear, Self::Shoes];

    /// String representation used in persistence and forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Outerwear => "Outerwear",
            Self::Shoes => "Shoes",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Top" => Ok(Self::Top),
            "Bottom" => Ok(Self::Bottom),
            "Outerwear" => Ok(Self::Outerwear),
            "Shoes" => Ok(Self::Shoes),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "category: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Style tag used to filter eligibility under a mood.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Style {
    Casual,
    Formal,
    Sport,
    Streetwear,
}

impl Style {
    /// All styles, in upload-form order.
    pub const ALL: [Style; 4] = [Self::Casual, Self::Formal, Self::Sport, Self::Streetwear];

    /// String representation used in persistence and forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Formal => "Formal",
            Self::Sport => "Sport",
            Self::Streetwear => "Streetwear",
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Style {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Casual" => Ok(Self::Casual),
            "Formal" => Ok(Self::Formal),
            "Sport" => Ok(Self::Sport),
            "Streetwear" => Ok(Self::Streetwear),
            other => Err(TypeConstraintError::InvalidValue(format!("style: {other}"))),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Named intent used to restrict eligible clothing styles for matching.
///
/// Stateless selector: supplied fresh on each match request, never persisted
/// with the wardrobe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Professional,
    Relaxed,
    DateNight,
    Experimental,
}

impl Mood {
    /// All moods, in the order the generator presents them.
    pub const ALL: [Mood; 4] = [
        Self::Professional,
        Self::Relaxed,
        Self::DateNight,
        Self::Experimental,
    ];

    /// Slug used in forms and API payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Relaxed => "relaxed",
            Self::DateNight => "date_night",
            Self::Experimental => "experimental",
        }
    }

    /// Human-facing label shown on mood buttons and in failure messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Professional => "I feel Professional",
            Self::Relaxed => "I feel Relaxed",
            Self::DateNight => "Date Night",
            Self::Experimental => "Experimental",
        }
    }

    /// The fixed, closed set of styles eligible under this mood.
    pub const fn allowed_styles(self) -> &'static [Style] {
        match self {
            Self::Professional => &[Style::Formal],
            Self::Relaxed => &[Style::Casual, Style::Sport],
            Self::DateNight => &[Style::Formal, Style::Streetwear],
            Self::Experimental => &[
                Style::Casual,
                Style::Formal,
                Style::Sport,
                Style::Streetwear,
            ],
        }
    }

    /// Whether items of the given style are eligible under this mood.
    pub fn allows(self, style: Style) -> bool {
        self.allowed_styles().contains(&style)
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Mood {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "professional" => Ok(Self::Professional),
            "relaxed" => Ok(Self::Relaxed),
            "date_night" => Ok(Self::DateNight),
            "experimental" => Ok(Self::Experimental),
            other => Err(TypeConstraintError::InvalidValue(format!("mood: {other}"))),
        }
    }
}

impl TryFrom<String> for Mood {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_item_ids() {
        let id = ItemId::new("  abc-123  ").unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn rejects_empty_image_refs() {
        let err = ImageRef::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("image reference"));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn normalises_hex_colors_to_uppercase() {
        let color = HexColor::new("#ffc0cb").unwrap();
        assert_eq!(color.as_str(), "#FFC0CB");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(HexColor::new("FFC0CB").is_err());
        assert!(HexColor::new("#FFF").is_err());
        assert!(HexColor::new("#GGGGGG").is_err());
    }

    #[test]
    fn only_black_and_white_are_neutral() {
        assert!(HexColor::new("#000000").unwrap().is_neutral());
        assert!(HexColor::new("#ffffff").unwrap().is_neutral());
        assert!(!HexColor::new("#808080").unwrap().is_neutral());
    }

    #[test]
    fn parses_closed_enumerations() {
        assert_eq!(
            Category::try_from("Outerwear").unwrap(),
            Category::Outerwear
        );
        assert_eq!(Style::try_from(" Streetwear ").unwrap(), Style::Streetwear);
        assert!(Category::try_from("Hat").is_err());
        assert!(Style::try_from("Grunge").is_err());
    }

    #[test]
    fn mood_style_sets_match_the_mappings() {
        assert_eq!(Mood::Professional.allowed_styles(), &[Style::Formal]);
        assert_eq!(
            Mood::Relaxed.allowed_styles(),
            &[Style::Casual, Style::Sport]
        );
        assert_eq!(
            Mood::DateNight.allowed_styles(),
            &[Style::Formal, Style::Streetwear]
        );
        assert_eq!(Mood::Experimental.allowed_styles(), &Style::ALL);
    }

    #[test]
    fn mood_slugs_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::try_from(mood.as_str()).unwrap(), mood);
        }
    }
}
