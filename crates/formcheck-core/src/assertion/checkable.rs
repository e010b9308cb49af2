//! Checkbox/switch style assertions

use super::Assertion;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsChecked;

impl Assertion<bool> for IsChecked {
    fn name(&self) -> &str {
        "is_checked"
    }

    fn is_valid(&self, value: &bool) -> bool {
        *value
    }

    fn description(&self) -> String {
        "must be checked".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotChecked;

impl Assertion<bool> for IsNotChecked {
    fn name(&self) -> &str {
        "is_not_checked"
    }

    fn is_valid(&self, value: &bool) -> bool {
        !*value
    }

    fn description(&self) -> String {
        "must not be checked".to_string()
    }
}
