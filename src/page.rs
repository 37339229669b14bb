//! Page capabilities
//!
//! The submitter never touches a document directly. The hosting page hands
//! in implementations of these traits, which keeps the core testable
//! without a browser.

use std::collections::HashMap;

use crate::policy::Rule;

/// Field names read from the login and registration forms.
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const USERNAME: &str = "username";
    pub const FIRSTNAME: &str = "firstname";
    pub const LASTNAME: &str = "lastname";
}

/// Which form an error message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Prefix for messages returned by the backend.
    pub(crate) fn failure_prefix(self) -> &'static str {
        match self {
            FormKind::Login => "Login failed",
            FormKind::Register => "Registration failed",
        }
    }

    /// Message shown when the request itself failed.
    pub(crate) fn generic_error(self) -> &'static str {
        match self {
            FormKind::Login => "An error occurred during login",
            FormKind::Register => "An error occurred during registration",
        }
    }
}

/// Reads the current text of a named form field.
pub trait FormReader {
    /// `None` if the form has no such field.
    fn field_value(&self, name: &str) -> Option<String>;
}

impl FormReader for HashMap<String, String> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormReader for HashMap<&str, &str> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| (*v).to_string())
    }
}

/// Moves the browser to another route.
pub trait Navigator {
    /// Navigates without leaving the current page in history.
    fn navigate_replace(&self, route: &str);
}

/// Shows non-blocking inline errors on a form.
pub trait Notifier {
    fn show_error(&self, form: FormKind, message: &str);
    fn clear_error(&self, form: FormKind);
}

/// Per-rule requirement indicators next to the password field.
pub trait RequirementSink {
    /// Toggles the "satisfied" state of the indicator for `rule`.
    /// Pages without an indicator for a rule ignore the call.
    fn set_satisfied(&self, rule: Rule, satisfied: bool);
}
