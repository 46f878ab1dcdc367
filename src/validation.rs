//! Input Validation - Clamp, Don't Reject
//!
//! Only a missing email address is an error. Out-of-range sizes are pulled
//! back into range; default-image strings are passed through as supplied.

use log::debug;

use crate::options::{MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};
use crate::builder::GravatarError;

/// Restrict a requested size to `[MIN_IMAGE_SIZE, MAX_IMAGE_SIZE]`.
pub fn clamp_image_size(size: i32) -> i32 {
    let clamped = size.clamp(MIN_IMAGE_SIZE, MAX_IMAGE_SIZE);
    if clamped != size {
        debug!("image size {} clamped to {}", size, clamped);
    }
    clamped
}

/// Reject empty or whitespace-only addresses.
pub fn validate_email(email: &str) -> Result<&str, GravatarError> {
    if email.trim().is_empty() {
        return Err(GravatarError::EmptyEmail);
    }
    Ok(email)
}

/// Reject attribute names that could break out of an `<img>` tag.
pub fn validate_attribute_name(name: &str) -> Result<&str, GravatarError> {
    let malformed = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        });
    if malformed {
        return Err(GravatarError::InvalidAttributeName(name.to_string()));
    }
    Ok(name)
}
