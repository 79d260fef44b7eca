//! Validation Schema
//!
//! Field rules for user input, shared by the create form and inline edits.
//! Values are validated as typed (raw text), so the same rules run on every
//! keystroke and again on submit.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{User, UserInput};

/// Minimum length of a name, counted in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Smallest accepted age.
pub const AGE_MIN: u32 = 1;

/// Editable user fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Age,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Email => "email",
        }
    }

    /// HTML `type` of the field's input. Age is a text input: a number input
    /// reports anything unparsable as empty, hiding "age must be a number".
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Name | Field::Age => "text",
            Field::Email => "email",
        }
    }

    /// HTML `inputmode` hint for on-screen keyboards
    pub fn input_mode(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Age => "numeric",
            Field::Email => "email",
        }
    }
}

/// A single rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("age is required")]
    AgeRequired,
    #[error("age must be a number")]
    AgeNotNumber,
    #[error("age must be a whole number")]
    AgeNotWhole,
    #[error("age must be greater than 0")]
    AgeTooSmall,
    #[error("age is too large")]
    AgeTooLarge,
    #[error("email is required")]
    EmailRequired,
    #[error("invalid email")]
    EmailInvalid,
}

/// Violations keyed by field, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Human-readable message for a field, if it is invalid
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// Record the outcome of validating one field
    pub fn apply(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => self.remove(field),
            Err(e) => self.insert(field, e),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.as_str(), error)?;
            first = false;
        }
        Ok(())
    }
}

/// Raw field values as typed into a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub age: String,
    pub email: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            age: user.age.to_string(),
            email: user.email.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Age => self.age = value,
            Field::Email => self.email = value,
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // WHATWG "valid e-mail address" production
        let pattern = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn check_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if value.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort { min: NAME_MIN_CHARS });
    }
    Ok(())
}

fn parse_age(value: &str) -> Result<u32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::AgeRequired);
    }
    let number: f64 = value.parse().map_err(|_| ValidationError::AgeNotNumber)?;
    if !number.is_finite() {
        return Err(ValidationError::AgeNotNumber);
    }
    if number < f64::from(AGE_MIN) {
        return Err(ValidationError::AgeTooSmall);
    }
    if number.fract() != 0.0 {
        return Err(ValidationError::AgeNotWhole);
    }
    if number > f64::from(u32::MAX) {
        return Err(ValidationError::AgeTooLarge);
    }
    Ok(number as u32)
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !email_regex().is_match(value) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Validate a single field value
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => check_name(value),
        Field::Age => parse_age(value).map(|_| ()),
        Field::Email => check_email(value),
    }
}

/// Validate a whole form, producing the request body when every field passes
pub fn validate(form: &UserForm) -> Result<UserInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(e) = check_name(&form.name) {
        errors.insert(Field::Name, e);
    }
    let age = match parse_age(&form.age) {
        Ok(age) => age,
        Err(e) => {
            errors.insert(Field::Age, e);
            0
        }
    };
    if let Err(e) = check_email(&form.email) {
        errors.insert(Field::Email, e);
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(UserInput {
        name: form.name.clone(),
        age,
        email: form.email.clone(),
    })
}
