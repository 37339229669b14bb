//! Special character rule.

use secrecy::{ExposeSecret, SecretString};

/// Characters accepted by the backend as "special".
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?_\":{}|<>";

/// Requires at least one character from [`SPECIAL_CHARACTERS`].
pub fn special_character_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
}
