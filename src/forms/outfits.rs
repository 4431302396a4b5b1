use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{Mood, TypeConstraintError};

#[derive(Deserialize, Validate)]
pub struct SuggestOutfitForm {
    #[validate(length(min = 1))]
    pub mood: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestOutfitFormPayload {
    pub mood: Mood,
}

#[derive(Debug, Error)]
pub enum SuggestOutfitFormError {
    #[error("Suggest outfit form validation failed: {0}")]
    Validation(String),
    #[error("Suggest outfit form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SuggestOutfitFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SuggestOutfitFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SuggestOutfitForm> for SuggestOutfitFormPayload {
    type Error = SuggestOutfitFormError;

    fn try_from(value: SuggestOutfitForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            mood: Mood::try_from(value.mood.as_str())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_mood_slugs() {
        let payload = SuggestOutfitFormPayload::try_from(SuggestOutfitForm {
            mood: "date_night".to_string(),
        })
        .unwrap();
        assert_eq!(payload.mood, Mood::DateNight);
    }

    #[test]
    fn rejects_unknown_moods() {
        let err = SuggestOutfitFormPayload::try_from(SuggestOutfitForm {
            mood: "melancholy".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, SuggestOutfitFormError::TypeConstraint(_)));
    }

    #[test]
    fn rejects_empty_moods() {
        let err = SuggestOutfitFormPayload::try_from(SuggestOutfitForm {
            mood: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, SuggestOutfitFormError::Validation(_)));
    }
}
