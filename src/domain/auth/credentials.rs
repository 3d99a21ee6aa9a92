// SPDX-License-Identifier: MPL-2.0
//! Credentials schema for the account form.
//!
//! Validation runs before any remote call: an email must look like
//! `local@domain.tld` and a password must be 8 to 60 characters long
//! (bounds inclusive). Each violation is attached to the field it concerns.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Maximum password length, in characters.
pub const PASSWORD_MAX_LEN: usize = 60;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is a valid regex")
});

/// Form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// A schema violation on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    PasswordTooShort,
    PasswordTooLong,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "auth-error-invalid-email",
            ValidationError::PasswordTooShort => "auth-error-password-too-short",
            ValidationError::PasswordTooLong => "auth-error-password-too-long",
        }
    }

    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::PasswordTooShort | ValidationError::PasswordTooLong => {
                Field::Password
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(f, "Invalid email format"),
            ValidationError::PasswordTooShort => write!(
                f,
                "Password should have minimum {PASSWORD_MIN_LEN} characters"
            ),
            ValidationError::PasswordTooLong => {
                write!(f, "Max {PASSWORD_MAX_LEN} characters for password")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Field-scoped validation messages. Empty when the input is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Drops the message attached to one field, e.g. once the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
        }
    }
}

/// Validated sign-in / sign-up input.
///
/// Only obtainable through [`validate`], so holding one means the schema passed.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Checks an email against the address format.
#[must_use]
pub fn check_email(email: &str) -> Option<ValidationError> {
    (!EMAIL_PATTERN.is_match(email)).then_some(ValidationError::InvalidEmail)
}

/// Checks a password against the length bounds.
#[must_use]
pub fn check_password(password: &str) -> Option<ValidationError> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        Some(ValidationError::PasswordTooShort)
    } else if len > PASSWORD_MAX_LEN {
        Some(ValidationError::PasswordTooLong)
    } else {
        None
    }
}

/// Validates raw form input against the schema.
///
/// # Errors
///
/// Returns every field-scoped violation when either field is invalid.
pub fn validate(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        email: check_email(email),
        password: check_password(password),
    };

    if errors.is_empty() {
        Ok(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}
