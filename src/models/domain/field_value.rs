use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The eight inputs of the rebel registration form, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Password,
    Birthdate,
    Faction,
    Experience,
    Message,
    Terms,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::Birthdate,
        FieldName::Faction,
        FieldName::Experience,
        FieldName::Message,
        FieldName::Terms,
    ];

    /// Stable identifier used by the page's inputs and error slots.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::Birthdate => "birthdate",
            FieldName::Faction => "faction",
            FieldName::Experience => "experience",
            FieldName::Message => "message",
            FieldName::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| AppError::NotFound(format!("form field '{}'", s)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Email(String),
    Password(String),
    Date(String),
    Select(Option<String>),
    Radio(Option<String>),
    Checkbox(bool),
}

impl FieldValue {
    /// The raw string value, if this input carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v)
            | FieldValue::Email(v)
            | FieldValue::Password(v)
            | FieldValue::Date(v) => Some(v.as_str()),
            FieldValue::Select(v) | FieldValue::Radio(v) => v.as_deref(),
            FieldValue::Checkbox(_) => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checkbox(true))
    }
}

/// Current values of the form inputs at the moment of submission.
///
/// A field without an entry reads as empty text or an unchecked box.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldSnapshot {
    values: BTreeMap<FieldName, FieldValue>,
}

impl FieldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldName, value: FieldValue) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// String value of `field`, or `""` when absent or not text-like.
    pub fn text(&self, field: FieldName) -> &str {
        self.get(field).and_then(FieldValue::text).unwrap_or("")
    }

    pub fn is_checked(&self, field: FieldName) -> bool {
        self.get(field).is_some_and(FieldValue::is_checked)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
