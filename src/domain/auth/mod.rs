// SPDX-License-Identifier: MPL-2.0
//! Account domain types and the credentials validation schema.

pub mod credentials;
pub mod mode;
pub mod user;

pub use credentials::{
    check_email, check_password, validate, Credentials, Field, FieldErrors, ValidationError,
    PASSWORD_MAX_LEN, PASSWORD_MIN_LEN,
};
pub use mode::AuthMode;
pub use user::User;
