// src/models/mod.rs

pub mod category;
pub mod course;
pub mod post;
pub mod question;
pub mod quiz_result;

use url::Url;

/// Validates that a string is a correctly formatted URL.
pub(crate) fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}
