//! Form field validation
//!
//! Each submitted field is trimmed and then run through a chain of checks.
//! A chain stops at its first failing check, so a field reports at most one
//! message. Values are stored as typed; HTML escaping happens at render time.

use chrono::{DateTime, NaiveDate};

/// A single failed check on a named form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failures collected while validating one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    #[cfg(test)]
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Start a check chain over a raw submitted value (trimmed first)
    pub fn field(&mut self, field: &'static str, raw: &str) -> FieldCheck<'_> {
        FieldCheck {
            errors: self,
            field,
            value: raw.trim().to_string(),
            failed: false,
        }
    }

    /// Optional ISO-8601 date. Blank input is `None`; anything unparsable
    /// records `message`.
    pub fn optional_date(
        &mut self,
        field: &'static str,
        raw: &str,
        message: &str,
    ) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match parse_date(raw) {
            Some(date) => Some(date),
            None => {
                self.add(field, message);
                None
            }
        }
    }

    /// Required numeric reference to another row
    pub fn required_id(&mut self, field: &'static str, raw: &str, message: &str) -> Option<i32> {
        match raw.trim().parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                self.add(field, message);
                None
            }
        }
    }
}

/// Check chain for one field; see [`ValidationErrors::field`]
pub struct FieldCheck<'e> {
    errors: &'e mut ValidationErrors,
    field: &'static str,
    value: String,
    failed: bool,
}

impl FieldCheck<'_> {
    pub fn min_chars(mut self, min: usize, message: &str) -> Self {
        if !self.failed && self.value.chars().count() < min {
            self.fail(message);
        }
        self
    }

    pub fn max_chars(mut self, max: usize, message: &str) -> Self {
        if !self.failed && self.value.chars().count() > max {
            self.fail(message);
        }
        self
    }

    /// ASCII letters and digits only
    pub fn alphanumeric(mut self, message: &str) -> Self {
        if !self.failed && !self.value.chars().all(|c| c.is_ascii_alphanumeric()) {
            self.fail(message);
        }
        self
    }

    /// The trimmed value, whether or not a check failed
    pub fn finish(self) -> String {
        self.value
    }

    fn fail(&mut self, message: &str) {
        self.errors.add(self.field, message);
        self.failed = true;
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part kept)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
