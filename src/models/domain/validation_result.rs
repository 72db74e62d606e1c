use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::models::domain::FieldName;

/// Reason a single field failed its rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Deserialize, Serialize)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("email is malformed")]
    EmailInvalid,
    #[error("password is required")]
    PasswordRequired,
    #[error("password shorter than {min} characters")]
    PasswordTooShort { min: usize },
    #[error("birthdate is required")]
    BirthdateRequired,
    #[error("birthdate is in the future")]
    BirthdateInFuture,
    #[error("faction is required")]
    FactionRequired,
    #[error("experience is required")]
    ExperienceRequired,
    #[error("message is required")]
    MessageRequired,
    #[error("message shorter than {min} characters")]
    MessageTooShort { min: usize },
    #[error("terms not accepted")]
    TermsNotAccepted,
}

impl FieldError {
    /// Machine-readable code, also used as the `validator` error code.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::NameRequired
            | FieldError::EmailRequired
            | FieldError::PasswordRequired
            | FieldError::BirthdateRequired
            | FieldError::FactionRequired
            | FieldError::ExperienceRequired
            | FieldError::MessageRequired => "required",
            FieldError::EmailInvalid => "email",
            FieldError::PasswordTooShort { .. } | FieldError::MessageTooShort { .. } => "length",
            FieldError::BirthdateInFuture => "future_date",
            FieldError::TermsNotAccepted => "must_accept",
        }
    }
}

/// Outcome of validating one field snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationResult {
    pub fields: BTreeMap<FieldName, bool>,
    pub errors: BTreeMap<FieldName, String>,
    pub failures: BTreeMap<FieldName, FieldError>,
    pub overall_valid: bool,
}

impl ValidationResult {
    /// Builds the result from per-field verdicts. `overall_valid` is derived,
    /// never set independently. A later verdict for the same field replaces
    /// an earlier one.
    pub fn from_verdicts<I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, Result<(), (FieldError, String)>)>,
    {
        let mut fields = BTreeMap::new();
        let mut errors = BTreeMap::new();
        let mut failures = BTreeMap::new();

        for (field, verdict) in verdicts {
            match verdict {
                Ok(()) => {
                    fields.insert(field, true);
                    failures.remove(&field);
                    errors.remove(&field);
                }
                Err((error, message)) => {
                    fields.insert(field, false);
                    failures.insert(field, error);
                    errors.insert(field, message);
                }
            }
        }

        let overall_valid = errors.is_empty();
        Self {
            fields,
            errors,
            failures,
            overall_valid,
        }
    }

    pub fn is_valid(&self, field: FieldName) -> bool {
        self.fields.get(&field).copied().unwrap_or(false)
    }

    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn failure(&self, field: FieldName) -> Option<FieldError> {
        self.failures.get(&field).copied()
    }

    /// Converts the failures into `validator`'s error collection, keyed by
    /// field identifier.
    pub fn to_validation_errors(&self) -> ValidationErrors {
        let mut out = ValidationErrors::new();
        for (field, message) in &self.errors {
            let code = self.failure(*field).map_or("invalid", |e| e.code());
            let error = ValidationError::new(code).with_message(message.clone().into());
            out.add(field.as_str(), error);
        }
        out
    }
}
