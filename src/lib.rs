//! Login/registration form handling library
//!
//! This library provides the client-side core of a login/registration page:
//! a password policy checker mirroring the server's policy, and a submitter
//! that posts JSON credentials and reacts to the backend's answer.
//!
//! The page itself stays outside: forms, navigation, inline errors and
//! requirement indicators are reached through the capability traits in
//! [`page`].
//!
//! # Features
//!
//! - `async` (default): Enables debounced keystroke evaluation with cancellation support
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `CREDENTIAL_FORMS_BASE_URL`: Backend origin (default: `http://localhost:5000`)
//! - `CREDENTIAL_FORMS_ROUTE_SCHEME`: `root` (`/login`) or `api` (`/api/login`)
//! - `CREDENTIAL_FORMS_REGISTRATION_SCHEMA`: `username` or `split-name`
//! - `CREDENTIAL_FORMS_LOGIN_REDIRECT`: Route after login (default: `/dashboard`)
//! - `CREDENTIAL_FORMS_REGISTER_REDIRECT`: Route after registration (default: `/`)
//!
//! # Example
//!
//! ```rust,no_run
//! use credential_forms::{evaluate_password, Credentials, CredentialSubmitter, HttpAuthApi, SubmitterConfig};
//! use credential_forms::page::{FormKind, Navigator, Notifier};
//! use secrecy::SecretString;
//!
//! struct Page;
//!
//! impl Navigator for Page {
//!     fn navigate_replace(&self, route: &str) { println!("-> {}", route); }
//! }
//!
//! impl Notifier for Page {
//!     fn show_error(&self, _form: FormKind, message: &str) { eprintln!("{}", message); }
//!     fn clear_error(&self, _form: FormKind) {}
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! println!("Valid: {}", evaluate_password(&password).is_valid());
//!
//! let config = SubmitterConfig::from_env()?;
//! let submitter = CredentialSubmitter::new(HttpAuthApi::new(&config), config);
//! let _ = submitter
//!     .submit_login(Credentials::new("me@example.com", password), &Page)
//!     .await;
//! # Ok(())
//! # }
//! ```

// Internal modules
mod api;
mod config;
mod error;
mod evaluator;
mod policy;
mod rules;
mod submitter;

pub mod page;

// Public API
pub use api::{
    ApiResponse, AuthApi, Credentials, HttpAuthApi, RegistrationFields, RegistrationRequest,
};
pub use config::{ConfigError, RegistrationSchema, RouteScheme, SubmitterConfig};
pub use error::{SubmitError, TransportError};
pub use evaluator::{evaluate_password, reflect_requirements};
pub use policy::{PolicyResult, Rule};
pub use rules::{MIN_LENGTH, SPECIAL_CHARACTERS};
pub use submitter::{CredentialSubmitter, SubmitState, handle_password_input};

#[cfg(feature = "async")]
pub use evaluator::{INPUT_DEBOUNCE, evaluate_password_tx};
