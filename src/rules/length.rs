//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Minimum accepted password length, in UTF-16 code units.
pub const MIN_LENGTH: usize = 10;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in UTF-16 code units, the way the page's input field
/// reports it, so characters outside the BMP count twice.
pub fn min_length_rule(password: &SecretString) -> bool {
    password.expose_secret().encode_utf16().count() >= MIN_LENGTH
}
