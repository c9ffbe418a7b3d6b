//! Helpers for reading urlencoded form bodies and collecting validation errors.

use std::collections::BTreeMap;

use url::Url;

/// Raw key/value pairs of a submitted form.
///
/// Keeps every occurrence of a key so multi-selects such as `genres` survive parsing.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `key`, trimmed. Empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// First value submitted for `key`, or `None` when absent or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value submitted for `key`, in submission order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Checkbox semantics: true when the key was submitted with a truthy value.
    ///
    /// Browsers omit unchecked boxes entirely; `false`, `0`, `off` and `n` are
    /// treated as unchecked for hidden-field fallbacks.
    pub fn flag(&self, key: &str) -> bool {
        match self.optional(key) {
            Some(value) => !matches!(
                value.to_ascii_lowercase().as_str(),
                "false" | "0" | "off" | "n"
            ),
            None => false,
        }
    }
}

/// Validation errors keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records an error for `field`. The first error reported for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
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

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn require(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.add(field, "This field is required.");
        }
    }

    /// Accepts absent values; present values must be absolute http(s) URLs.
    pub fn check_url(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };

        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => self.add(field, "Invalid URL."),
        }
    }

    /// Accepts absent values; present values must contain exactly 10 digits.
    pub fn check_phone(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };

        let digits = value.chars().filter(char::is_ascii_digit).count();
        let allowed = value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '.' | '(' | ')'));

        if digits != 10 || !allowed {
            self.add(field, "Invalid phone number, expected a format like 123-456-7890.");
        }
    }

    pub fn check_state(&mut self, field: &str, value: &str) {
        if !value.is_empty() && !super::choice::is_state(value) {
            self.add(field, "Not a valid choice.");
        }
    }

    pub fn check_genres(&mut self, field: &str, values: &[String]) {
        if values.is_empty() {
            self.add(field, "Select at least one genre.");
        } else if let Some(invalid) = values.iter().find(|g| !super::choice::is_genre(g)) {
            self.add(field, format!("'{}' is not a valid choice.", invalid));
        }
    }
}
