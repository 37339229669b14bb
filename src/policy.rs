//! Policy result types.

use std::fmt;

/// A single requirement of the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinLength,
    HasUpperCase,
    HasLowerCase,
    HasNumber,
    HasSpecial,
}

impl Rule {
    /// Every rule, in display order.
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::HasUpperCase,
        Rule::HasLowerCase,
        Rule::HasNumber,
        Rule::HasSpecial,
    ];

    /// Name used by the page to identify the requirement indicator.
    pub fn name(self) -> &'static str {
        match self {
            Rule::MinLength => "minLength",
            Rule::HasUpperCase => "hasUpperCase",
            Rule::HasLowerCase => "hasLowerCase",
            Rule::HasNumber => "hasNumber",
            Rule::HasSpecial => "hasSpecial",
        }
    }

    /// Looks a rule up by its indicator name.
    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// Human-readable requirement, worded like the backend's rejections.
    pub fn requirement(self) -> &'static str {
        match self {
            Rule::MinLength => "Password must be at least 10 characters",
            Rule::HasUpperCase => "Password must contain at least one uppercase letter",
            Rule::HasLowerCase => "Password must contain at least one lowercase letter",
            Rule::HasNumber => "Password must contain at least one number",
            Rule::HasSpecial => "Password must contain at least one special character",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of evaluating a password against every [`Rule`].
///
/// `is_valid` is computed from the per-rule flags, never stored, so the
/// two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolicyResult {
    pub min_length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PolicyResult {
    /// Returns whether the given rule is satisfied.
    pub fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::MinLength => self.min_length,
            Rule::HasUpperCase => self.has_upper_case,
            Rule::HasLowerCase => self.has_lower_case,
            Rule::HasNumber => self.has_number,
            Rule::HasSpecial => self.has_special,
        }
    }

    pub(crate) fn set(&mut self, rule: Rule, satisfied: bool) {
        let slot = match rule {
            Rule::MinLength => &mut self.min_length,
            Rule::HasUpperCase => &mut self.has_upper_case,
            Rule::HasLowerCase => &mut self.has_lower_case,
            Rule::HasNumber => &mut self.has_number,
            Rule::HasSpecial => &mut self.has_special,
        };
        *slot = satisfied;
    }

    /// True iff every rule is satisfied.
    pub fn is_valid(&self) -> bool {
        Rule::ALL.into_iter().all(|rule| self.get(rule))
    }

    /// Iterates `(rule, satisfied)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.into_iter().map(move |rule| (rule, self.get(rule)))
    }

    /// Rules that are not satisfied.
    pub fn failed_rules(&self) -> Vec<Rule> {
        self.iter()
            .filter(|(_, satisfied)| !satisfied)
            .map(|(rule, _)| rule)
            .collect()
    }

    /// One message per failing rule.
    pub fn reasons(&self) -> Vec<&'static str> {
        self.failed_rules()
            .into_iter()
            .map(Rule::requirement)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_satisfied() -> PolicyResult {
        PolicyResult {
            min_length: true,
            has_upper_case: true,
            has_lower_case: true,
            has_number: true,
            has_special: true,
        }
    }

    #[test]
    fn test_rule_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_name(rule.name()), Some(rule));
        }
        assert_eq!(Rule::from_name("hasEmoji"), None);
    }

    #[test]
    fn test_is_valid_requires_every_rule() {
        assert!(all_satisfied().is_valid());

        for rule in Rule::ALL {
            let mut result = all_satisfied();
            result.set(rule, false);
            assert!(!result.is_valid(), "{} unset should invalidate", rule);
            assert_eq!(result.failed_rules(), vec![rule]);
        }
    }

    #[test]
    fn test_default_is_all_false() {
        let result = PolicyResult::default();
        assert!(!result.is_valid());
        assert_eq!(result.reasons().len(), 5);
    }

    #[test]
    fn test_reasons_match_backend_wording() {
        let mut result = all_satisfied();
        result.set(Rule::MinLength, false);
        result.set(Rule::HasSpecial, false);

        let reasons = result.reasons();
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("at least 10 characters"));
        assert!(reasons[1].contains("special character"));
    }
}
