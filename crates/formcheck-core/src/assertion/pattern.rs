//! Pattern assertions

use super::Assertion;
use crate::error::{CoreError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email regex")
});

static WEB_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:https?://)?([a-zA-Z0-9][a-zA-Z0-9\-]*\.)+[a-zA-Z]{2,63}(:\d{1,5})?([/?#]\S*)?$")
        .expect("web url regex")
});

/// Asserts the whole value matches a regular expression
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: String,
    regex: std::result::Result<Regex, String>,
    description: Option<String>,
}

impl Matches {
    /// A pattern that fails to compile is reported by `check_config`
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| e.to_string());
        Self {
            pattern,
            regex,
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl<T: AsRef<str>> Assertion<T> for Matches {
    fn name(&self) -> &str {
        "matches"
    }

    fn is_valid(&self, value: &T) -> bool {
        match &self.regex {
            Ok(regex) => regex.is_match(value.as_ref()),
            Err(_) => false,
        }
    }

    fn description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("must match pattern {}", self.pattern))
    }

    fn check_config(&self) -> Result<()> {
        match &self.regex {
            Ok(_) => Ok(()),
            Err(e) => Err(CoreError::InvalidPattern(format!("{}: {}", self.pattern, e))),
        }
    }
}

/// Asserts the value is an email address
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl<T: AsRef<str>> Assertion<T> for Email {
    fn name(&self) -> &str {
        "email"
    }

    fn is_valid(&self, value: &T) -> bool {
        EMAIL_RE.is_match(value.as_ref())
    }

    fn description(&self) -> String {
        "must be a valid email address".to_string()
    }
}

/// Asserts the value is a web URL (scheme optional)
#[derive(Debug, Clone, Copy, Default)]
pub struct WebUrl;

impl<T: AsRef<str>> Assertion<T> for WebUrl {
    fn name(&self) -> &str {
        "web_url"
    }

    fn is_valid(&self, value: &T) -> bool {
        WEB_URL_RE.is_match(value.as_ref())
    }

    fn description(&self) -> String {
        "must be a valid web URL".to_string()
    }
}
