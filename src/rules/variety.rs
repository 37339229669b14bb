//! Character class rules - uppercase, lowercase and digits.
//!
//! Classes are ASCII only: `É` or `ß` satisfy neither letter rule.

use secrecy::{ExposeSecret, SecretString};

/// Requires at least one character in `[A-Z]`.
pub fn uppercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

/// Requires at least one character in `[a-z]`.
pub fn lowercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

/// Requires at least one character in `[0-9]`.
pub fn number_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_rule() {
        assert!(uppercase_rule(&secret("lowerA")));
        assert!(!uppercase_rule(&secret("lowercase123!")));
    }

    #[test]
    fn test_lowercase_rule() {
        assert!(lowercase_rule(&secret("UPPERa")));
        assert!(!lowercase_rule(&secret("UPPERCASE123!")));
    }

    #[test]
    fn test_number_rule() {
        assert!(number_rule(&secret("NoNumbers9")));
        assert!(!number_rule(&secret("NoNumbers!")));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let pwd = secret("ÉÀÜßçñ");
        assert!(!uppercase_rule(&pwd));
        assert!(!lowercase_rule(&pwd));
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        // Arabic-Indic digits
        assert!(!number_rule(&secret("١٢٣")));
    }
}
