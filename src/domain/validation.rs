//! Field validation for the User entity.
//!
//! Rules are an ordered table of (field, predicate, message). Every field is
//! checked, but only the first failing rule for a given field is reported, so
//! "required" always wins over "format" for the same field.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::ValidateEmail;

use crate::config::{
    FIELD_EMAIL, FIELD_NAME, MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED,
};
use crate::domain::{User, UserPayload};

/// Field name to violation message.
///
/// Serializes as a flat JSON object, which is also the 400 response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when no field failed
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

/// A single constraint on one field of a [`User`].
pub struct FieldRule {
    pub field: &'static str,
    pub value: fn(&User) -> &str,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl FieldRule {
    /// Whether the user satisfies this rule
    pub fn passes(&self, user: &User) -> bool {
        (self.check)((self.value)(user))
    }
}

fn user_name(user: &User) -> &str {
    &user.name
}

fn user_email(user: &User) -> &str {
    &user.email
}

fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Ordered rule table. Per field, earlier rules take precedence.
pub const USER_RULES: &[FieldRule] = &[
    FieldRule {
        field: FIELD_NAME,
        value: user_name,
        check: is_not_blank,
        message: MSG_NAME_REQUIRED,
    },
    FieldRule {
        field: FIELD_EMAIL,
        value: user_email,
        check: is_not_blank,
        message: MSG_EMAIL_REQUIRED,
    },
    FieldRule {
        field: FIELD_EMAIL,
        value: user_email,
        check: is_valid_email,
        message: MSG_EMAIL_INVALID,
    },
];

/// Syntactic email check: `local@domain`, no whitespace, and a domain with
/// at least one inner dot.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }

    value.validate_email()
}

/// Evaluate every rule against the user and collect the violations.
pub fn validate_user(user: &User) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for rule in USER_RULES {
        if errors.has(rule.field) {
            continue;
        }
        if !rule.passes(user) {
            errors.add(rule.field, rule.message);
        }
    }

    errors
}

/// Types that can be checked against the field rules before persistence.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

impl Validate for User {
    fn validate(&self) -> Result<(), FieldErrors> {
        validate_user(self).into_result()
    }
}

impl Validate for UserPayload {
    fn validate(&self) -> Result<(), FieldErrors> {
        validate_user(&self.to_user()).into_result()
    }
}
