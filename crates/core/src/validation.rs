//! Field validation shared by the input models.
//!
//! Length limits are declared on the inputs with `#[validate(length(..))]`
//! and mirrored by CHECK constraints in the migrations. Enumerated text
//! columns go through the `validate_*` functions below via
//! `#[validate(custom(function = ..))]`.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Enumerated values
   -------------------------------------------------------------------------- */

pub const FRIENDSHIP_PENDING: &str = "PENDING";
pub const FRIENDSHIP_ACTIVE: &str = "ACTIVE";
pub const FRIENDSHIP_BLOCKED: &str = "BLOCKED";

/// All valid friendship status values.
pub const FRIENDSHIP_STATUSES: &[&str] = &[FRIENDSHIP_PENDING, FRIENDSHIP_ACTIVE, FRIENDSHIP_BLOCKED];

pub const LANGUAGE_FRENCH: &str = "FRENCH";
pub const LANGUAGE_ENGLISH: &str = "ENGLISH";

/// All valid UI language values.
pub const LANGUAGES: &[&str] = &[LANGUAGE_FRENCH, LANGUAGE_ENGLISH];

pub const SCHOOL_ACTIVE: &str = "ACTIVE";
pub const SCHOOL_INACTIVE: &str = "INACTIVE";

/// All valid school membership status values.
pub const SCHOOL_STATUSES: &[&str] = &[SCHOOL_ACTIVE, SCHOOL_INACTIVE];

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

fn one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("one_of");
    err.message = Some(Cow::Owned(format!(
        "'{value}' is not one of: {}",
        allowed.join(", ")
    )));
    Err(err)
}

pub fn validate_friendship_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, FRIENDSHIP_STATUSES)
}

pub fn validate_language(value: &str) -> Result<(), ValidationError> {
    one_of(value, LANGUAGES)
}

pub fn validate_school_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, SCHOOL_STATUSES)
}

/// Reject blank strings (empty or whitespace only).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
