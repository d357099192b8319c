//! Domain layer - Core business entities and logic
//!
//! This module contains the User entity and the field rules it must
//! satisfy before it is handed to a repository.
//!
//! DDD: Domain layer has NO infrastructure dependencies.

pub mod user;
pub mod validation;

pub use user::{User, UserPayload};
pub use validation::{is_valid_email, validate_user, FieldErrors, FieldRule, Validate};
