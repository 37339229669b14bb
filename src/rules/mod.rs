//! Password policy rules
//!
//! Each rule checks a single requirement of the server-side password policy.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, min_length_rule};
pub use special::{SPECIAL_CHARACTERS, special_character_rule};
pub use variety::{lowercase_rule, number_rule, uppercase_rule};

/// Signature shared by every rule check.
/// - `true` - Requirement satisfied
/// - `false` - Requirement not satisfied
pub type RuleCheck = fn(&secrecy::SecretString) -> bool;
