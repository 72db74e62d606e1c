use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::constants::messages::{self, Locale};
use crate::models::domain::{FieldError, FieldName, FieldSnapshot, ValidationResult};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex pattern")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Applies the registration form's per-field rules.
///
/// Every rule runs on every call; a failing field never hides the verdict of
/// another.
#[derive(Clone, Debug)]
pub struct FormValidator {
    locale: Locale,
    password_min_length: usize,
    message_min_length: usize,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl FormValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            locale: config.locale,
            password_min_length: config.password_min_length,
            message_min_length: config.message_min_length,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Validates against today's local calendar date.
    pub fn validate(&self, snapshot: &FieldSnapshot) -> ValidationResult {
        self.validate_as_of(snapshot, Local::now().date_naive())
    }

    pub fn validate_as_of(&self, snapshot: &FieldSnapshot, today: NaiveDate) -> ValidationResult {
        ValidationResult::from_verdicts(FieldName::ALL.into_iter().map(|field| {
            let verdict = self
                .check(field, snapshot, today)
                .map_err(|error| (error, messages::field_error_message(&error, self.locale)));
            if let Err((error, _)) = &verdict {
                log::debug!("field '{}' rejected: {}", field, error);
            }
            (field, verdict)
        }))
    }

    /// The verdict for a single field.
    pub fn check(
        &self,
        field: FieldName,
        snapshot: &FieldSnapshot,
        today: NaiveDate,
    ) -> Result<(), FieldError> {
        match field {
            FieldName::Name => {
                if snapshot.text(field).trim().is_empty() {
                    return Err(FieldError::NameRequired);
                }
            }
            FieldName::Email => {
                let value = snapshot.text(field);
                if value.trim().is_empty() {
                    return Err(FieldError::EmailRequired);
                }
                if !is_valid_email(value) {
                    return Err(FieldError::EmailInvalid);
                }
            }
            FieldName::Password => {
                let value = snapshot.text(field);
                if value.trim().is_empty() {
                    return Err(FieldError::PasswordRequired);
                }
                if value.chars().count() < self.password_min_length {
                    return Err(FieldError::PasswordTooShort {
                        min: self.password_min_length,
                    });
                }
            }
            FieldName::Birthdate => {
                let birth = parse_date(snapshot.text(field)).ok_or(FieldError::BirthdateRequired)?;
                // Same day is allowed; only a strictly later date fails.
                if birth > today {
                    return Err(FieldError::BirthdateInFuture);
                }
            }
            FieldName::Faction => {
                if snapshot.text(field).is_empty() {
                    return Err(FieldError::FactionRequired);
                }
            }
            FieldName::Experience => {
                if snapshot.text(field).is_empty() {
                    return Err(FieldError::ExperienceRequired);
                }
            }
            FieldName::Message => {
                let value = snapshot.text(field).trim();
                if value.is_empty() {
                    return Err(FieldError::MessageRequired);
                }
                if value.chars().count() < self.message_min_length {
                    return Err(FieldError::MessageTooShort {
                        min: self.message_min_length,
                    });
                }
            }
            FieldName::Terms => {
                if !snapshot.is_checked(field) {
                    return Err(FieldError::TermsNotAccepted);
                }
            }
        }
        Ok(())
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
