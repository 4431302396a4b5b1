//! Image collaborator: converts uploaded image bytes into a directly
//! displayable `data:` URI. The rest of the application treats the result as
//! an opaque reference and never decodes it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::domain::types::{ImageRef, TypeConstraintError};

/// Encodes image bytes of the given content type as a data URI.
pub fn to_data_uri(content_type: &str, bytes: &[u8]) -> Result<ImageRef, TypeConstraintError> {
    if bytes.is_empty() {
        return Err(TypeConstraintError::EmptyString("image file"));
    }
    ImageRef::new(format!(
        "data:{content_type};base64,{}",
        STANDARD.encode(bytes)
    ))
}
