//! Emptiness and substring assertions

use super::length::HasLength;
use super::Assertion;

/// Asserts the value has no content
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

impl<T: HasLength> Assertion<T> for IsEmpty {
    fn name(&self) -> &str {
        "is_empty"
    }

    fn is_valid(&self, value: &T) -> bool {
        value.length() == 0
    }

    fn description(&self) -> String {
        "must be empty".to_string()
    }
}

/// Asserts the value has some content
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotEmpty;

impl<T: HasLength> Assertion<T> for IsNotEmpty {
    fn name(&self) -> &str {
        "is_not_empty"
    }

    fn is_valid(&self, value: &T) -> bool {
        value.length() > 0
    }

    fn description(&self) -> String {
        "cannot be empty".to_string()
    }
}

/// Asserts the value contains a substring
#[derive(Debug, Clone)]
pub struct Contains {
    needle: String,
    ignore_case: bool,
}

impl Contains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            ignore_case: false,
        }
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

impl<T: AsRef<str>> Assertion<T> for Contains {
    fn name(&self) -> &str {
        "contains"
    }

    fn is_valid(&self, value: &T) -> bool {
        let haystack = value.as_ref();
        if self.ignore_case {
            haystack
                .to_lowercase()
                .contains(&self.needle.to_lowercase())
        } else {
            haystack.contains(&self.needle)
        }
    }

    fn description(&self) -> String {
        format!("must contain \"{}\"", self.needle)
    }
}
