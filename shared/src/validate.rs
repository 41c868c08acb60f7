use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Check an email address for plausible shape (`user@host.tld`).
///
/// This is a form-level gate only; the server remains the authority on
/// whether an address is acceptable.
pub fn is_valid_email(value: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));
    re.is_match(value)
}

/// Field-scoped validation messages collected before a form submit.
///
/// Keys are stable field names (`"name"`, `"email"`, ...) so the UI can
/// render each message under the offending input. Ordered so rendering and
/// tests are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fold another set of errors in without overwriting messages already
    /// recorded for a field (the first message wins).
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.errors {
            self.errors.entry(field).or_insert(message);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("student@example.com"));
        assert!(is_valid_email("first.last@school.edu"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_field_errors_first_message_wins_on_merge() {
        let mut a = FieldErrors::new();
        a.add("price_per_hour", "Hourly rate must be a number");

        let mut b = FieldErrors::new();
        b.add("price_per_hour", "Hourly rate must be greater than zero");
        b.add("name", "Course name is required");

        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("price_per_hour"), Some("Hourly rate must be a number"));
        assert_eq!(a.get("name"), Some("Course name is required"));
    }

    #[test]
    fn test_field_errors_empty() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.get("name"), None);
    }
}
