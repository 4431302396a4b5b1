use std::io::{Read, Seek, SeekFrom};

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use thiserror::Error;

use crate::domain::item::NewClothingItem;
use crate::domain::types::{Category, HexColor, Style, TypeConstraintError};
use crate::images;

/// Multipart form submitted from the upload panel.
#[derive(MultipartForm)]
pub struct UploadItemForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
    pub category: Text<String>,
    pub color: Text<String>,
    pub style: Text<String>,
}

#[derive(Debug, Error)]
pub enum UploadItemFormError {
    #[error("an image file is required")]
    MissingImage,
    #[error("uploaded file is not an image")]
    NotAnImage,
    #[error("error reading uploaded image")]
    FileReadError,
    #[error("upload form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<std::io::Error> for UploadItemFormError {
    fn from(_: std::io::Error) -> Self {
        Self::FileReadError
    }
}

impl From<TypeConstraintError> for UploadItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl UploadItemForm {
    /// Validates the submission and converts it into domain attributes.
    ///
    /// The uploaded file must carry an `image/*` content type; its bytes are
    /// handed to the image collaborator and come back as an opaque data URI.
    /// Category, style and color are parsed into the closed domain types, so
    /// an out-of-enum value is rejected here and never reaches the store.
    pub fn into_new_item(mut self) -> Result<NewClothingItem, UploadItemFormError> {
        if self.image.size == 0 {
            return Err(UploadItemFormError::MissingImage);
        }
        let content_type = self
            .image
            .content_type
            .as_ref()
            .ok_or(UploadItemFormError::NotAnImage)?;
        if !content_type.essence_str().starts_with("image/") {
            return Err(UploadItemFormError::NotAnImage);
        }
        let content_type = content_type.essence_str().to_string();

        let mut bytes = Vec::with_capacity(self.image.size);
        self.image.file.seek(SeekFrom::Start(0))?;
        self.image.file.read_to_end(&mut bytes)?;

        Ok(NewClothingItem {
            image: images::to_data_uri(&content_type, &bytes)?,
            category: Category::try_from(self.category.0.as_str())?,
            color: HexColor::new(self.color.0)?,
            style: Style::try_from(self.style.0.as_str())?,
        })
    }
}
