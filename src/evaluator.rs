//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::page::RequirementSink;
use crate::policy::{PolicyResult, Rule};
use crate::rules::{
    RuleCheck, lowercase_rule, min_length_rule, number_rule, special_character_rule,
    uppercase_rule,
};

/// Debounce applied to keystroke-driven evaluations.
#[cfg(feature = "async")]
pub const INPUT_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates a password against every policy rule.
///
/// Pure and deterministic: any input, including the empty string, yields a
/// result with one flag per rule.
pub fn evaluate_password(password: &SecretString) -> PolicyResult {
    let rules: [(Rule, RuleCheck); 5] = [
        (Rule::MinLength, min_length_rule),
        (Rule::HasUpperCase, uppercase_rule),
        (Rule::HasLowerCase, lowercase_rule),
        (Rule::HasNumber, number_rule),
        (Rule::HasSpecial, special_character_rule),
    ];

    let mut result = PolicyResult::default();
    for (rule, check) in rules {
        result.set(rule, check(password));
    }
    result
}

/// Evaluates the password and mirrors each rule onto the page's
/// requirement indicators.
///
/// # Returns
/// Whether the password passes the whole policy.
pub fn reflect_requirements<S>(password: &SecretString, sink: &S) -> bool
where
    S: RequirementSink + ?Sized,
{
    let result = evaluate_password(password);
    for (rule, satisfied) in result.iter() {
        sink.set_satisfied(rule, satisfied);
    }
    result.is_valid()
}

/// Keystroke evaluation: waits for typing to settle, then sends the result.
///
/// Callers cancel `token` when a newer keystroke arrives; a cancelled
/// evaluation sends nothing.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation superseded by newer input");
            return;
        }
        _ = tokio::time::sleep(INPUT_DEBOUNCE) => {}
    }

    let result = evaluate_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password policy result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
