//! Declarative validation schemas evaluated over a whole submitted record.

use std::sync::LazyLock;

use regex::Regex;

use super::registry::{FieldErrors, FormData};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// A single validation rule with its user-visible failure message.
///
/// Rules referencing a `peer` read the sibling field's value from the
/// record submitted in the same batch, never from previously stored
/// state, so cross-field checks cannot compare against stale input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must be non-empty.
    Required { message: String },
    /// The value must look like an e-mail address. Empty values pass;
    /// pair with [`Rule::required`] to forbid them.
    Email { message: String },
    /// The value must be at least `min` characters.
    MinLen { min: usize, message: String },
    /// Like `Required`, but only when the named peer field is non-empty.
    RequiredWith { peer: String, message: String },
    /// Like `MinLen`, but only when the named peer field is non-empty.
    MinLenWith {
        peer: String,
        min: usize,
        message: String,
    },
    /// The value must equal the named peer field's value.
    Matches { peer: String, message: String },
}

impl Rule {
    /// The value must be non-empty.
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// The value must be a plausible e-mail address.
    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    /// The value must be at least `min` characters long.
    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        Self::MinLen {
            min,
            message: message.into(),
        }
    }

    /// The value must be non-empty whenever `peer` is non-empty.
    pub fn required_with(peer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RequiredWith {
            peer: peer.into(),
            message: message.into(),
        }
    }

    /// The value must be at least `min` characters whenever `peer` is non-empty.
    pub fn min_len_with(peer: impl Into<String>, min: usize, message: impl Into<String>) -> Self {
        Self::MinLenWith {
            peer: peer.into(),
            min,
            message: message.into(),
        }
    }

    /// The value must equal the value of `peer`.
    pub fn matches(peer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Matches {
            peer: peer.into(),
            message: message.into(),
        }
    }

    /// Checks `value` against this rule, returning the failure message if
    /// it is violated. `record` supplies sibling values for peer rules.
    fn check(&self, value: &str, record: &FormData) -> Option<String> {
        let peer_value = |peer: &str| record.get(peer).map(String::as_str).unwrap_or("");
        match self {
            Self::Required { message } => value.is_empty().then(|| message.clone()),
            Self::Email { message } => {
                (!value.is_empty() && !EMAIL_RE.is_match(value)).then(|| message.clone())
            }
            Self::MinLen { min, message } => {
                (value.chars().count() < *min).then(|| message.clone())
            }
            Self::RequiredWith { peer, message } => {
                (!peer_value(peer).is_empty() && value.is_empty()).then(|| message.clone())
            }
            Self::MinLenWith { peer, min, message } => {
                (!peer_value(peer).is_empty() && value.chars().count() < *min)
                    .then(|| message.clone())
            }
            Self::Matches { peer, message } => {
                (value != peer_value(peer)).then(|| message.clone())
            }
        }
    }
}

/// An ordered set of per-field rules.
///
/// Validation is non-short-circuiting across fields: every field is
/// checked even after the first failure, so one pass reports every
/// invalid field. Within a field, the first violated rule supplies that
/// field's single message.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Vec<Rule>)>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field with its rules, evaluated in order.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    /// Validates the record, returning either the clean data or a map of
    /// field name to failure message. Error keys are always a subset of
    /// the schema's declared field names.
    pub fn validate(&self, data: &FormData) -> Result<FormData, FieldErrors> {
        let mut errors = FieldErrors::new();
        for (name, rules) in &self.fields {
            let value = data.get(name).map(String::as_str).unwrap_or("");
            for rule in rules {
                if let Some(message) = rule.check(value, data) {
                    errors.insert(name.clone(), message);
                    break;
                }
            }
        }
        if errors.is_empty() {
            Ok(data.clone())
        } else {
            Err(errors)
        }
    }
}
