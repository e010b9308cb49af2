//! Structured URI assertion

use super::{Assertion, Verdict};
use std::fmt;
use url::Url;

const INVALID_URI: &str = "must be a valid URI";
const CUSTOM_CHECK_FAILED: &str = "failed custom validation";

struct UriCheck {
    description: Option<String>,
    predicate: Box<dyn Fn(&Url) -> bool>,
}

/// Asserts the value parses as an absolute URI, optionally restricting its
/// scheme and running caller-supplied checks against the parsed value.
///
/// Checks run in order: parse, scheme whitelist, custom checks. The failure
/// message names the first check that failed.
#[derive(Default)]
pub struct Uri {
    schemes: Vec<String>,
    checks: Vec<UriCheck>,
}

impl Uri {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given schemes (case-insensitive)
    pub fn schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes
            .extend(schemes.into_iter().map(|s| s.into().to_lowercase()));
        self
    }

    /// Add a check with the generic failure message
    pub fn that(mut self, predicate: impl Fn(&Url) -> bool + 'static) -> Self {
        self.checks.push(UriCheck {
            description: None,
            predicate: Box::new(predicate),
        });
        self
    }

    /// Add a check with its own failure message
    pub fn that_with(
        mut self,
        description: impl Into<String>,
        predicate: impl Fn(&Url) -> bool + 'static,
    ) -> Self {
        self.checks.push(UriCheck {
            description: Some(description.into()),
            predicate: Box::new(predicate),
        });
        self
    }

    fn scheme_message(&self) -> String {
        format!(
            "must have one of the following schemes: {}",
            self.schemes.join(", ")
        )
    }
}

impl<T: AsRef<str>> Assertion<T> for Uri {
    fn name(&self) -> &str {
        "uri"
    }

    fn is_valid(&self, value: &T) -> bool {
        self.verdict(value).is_pass()
    }

    fn description(&self) -> String {
        if self.schemes.is_empty() {
            INVALID_URI.to_string()
        } else {
            self.scheme_message()
        }
    }

    fn verdict(&self, value: &T) -> Verdict {
        let url = match Url::parse(value.as_ref()) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("uri parse failed for {:?}: {}", value.as_ref(), e);
                return Verdict::Fail(INVALID_URI.to_string());
            }
        };

        if !self.schemes.is_empty() && !self.schemes.iter().any(|s| s == url.scheme()) {
            return Verdict::Fail(self.scheme_message());
        }

        for check in &self.checks {
            if !(check.predicate)(&url) {
                let message = check
                    .description
                    .clone()
                    .unwrap_or_else(|| CUSTOM_CHECK_FAILED.to_string());
                return Verdict::Fail(message);
            }
        }

        Verdict::Pass
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("schemes", &self.schemes)
            .field("checks", &self.checks.len())
            .finish()
    }
}
