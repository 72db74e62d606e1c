use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::domain::FieldError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Hu,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hu" | "hu-hu" => Ok(Locale::Hu),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Hu => write!(f, "hu"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Renders the text shown in a field's error slot.
pub fn field_error_message(error: &FieldError, locale: Locale) -> String {
    match locale {
        Locale::Hu => hungarian(error),
        Locale::En => english(error),
    }
}

pub fn quiz_summary(correct: usize, total: usize, locale: Locale) -> String {
    match locale {
        Locale::Hu => format!("Eredményed: {} / {} helyes válasz.", correct, total),
        Locale::En => format!("Your score: {} / {} correct answers.", correct, total),
    }
}

fn hungarian(error: &FieldError) -> String {
    match error {
        FieldError::NameRequired => "A név megadása kötelező.".to_string(),
        FieldError::EmailRequired => "Az e-mail megadása kötelező.".to_string(),
        FieldError::EmailInvalid => "Kérlek, érvényes e-mail címet adj meg.".to_string(),
        FieldError::PasswordRequired => "A jelszó megadása kötelező.".to_string(),
        FieldError::PasswordTooShort { min } => {
            format!("A jelszónak legalább {} karakter hosszúnak kell lennie.", min)
        }
        FieldError::BirthdateRequired => "A születési dátum megadása kötelező.".to_string(),
        FieldError::BirthdateInFuture => "A születési dátum nem lehet a jövőben.".to_string(),
        FieldError::FactionRequired => "Válassz egy oldalt.".to_string(),
        FieldError::ExperienceRequired => "Válaszd ki a tapasztalati szinted.".to_string(),
        FieldError::MessageRequired => "Írj legalább egy rövid üzenetet.".to_string(),
        FieldError::MessageTooShort { min } => {
            format!("Az üzenet legyen legalább {} karakter.", min)
        }
        FieldError::TermsNotAccepted => "El kell fogadnod a feltételeket.".to_string(),
    }
}

fn english(error: &FieldError) -> String {
    match error {
        FieldError::NameRequired => "Name is required.".to_string(),
        FieldError::EmailRequired => "Email is required.".to_string(),
        FieldError::EmailInvalid => "Please enter a valid email address.".to_string(),
        FieldError::PasswordRequired => "Password is required.".to_string(),
        FieldError::PasswordTooShort { min } => {
            format!("The password must be at least {} characters long.", min)
        }
        FieldError::BirthdateRequired => "Birth date is required.".to_string(),
        FieldError::BirthdateInFuture => "Birth date cannot be in the future.".to_string(),
        FieldError::FactionRequired => "Choose a side.".to_string(),
        FieldError::ExperienceRequired => "Select your experience level.".to_string(),
        FieldError::MessageRequired => "Write at least a short message.".to_string(),
        FieldError::MessageTooShort { min } => {
            format!("The message must be at least {} characters long.", min)
        }
        FieldError::TermsNotAccepted => "You must accept the terms.".to_string(),
    }
}
