//! Credential submission - login and registration flows.

use std::sync::atomic::{AtomicBool, Ordering};

use secrecy::SecretString;

use crate::api::{ApiResponse, AuthApi, Credentials, RegistrationFields};
use crate::config::SubmitterConfig;
use crate::error::{SubmitError, TransportError};
use crate::evaluator::{evaluate_password, reflect_requirements};
use crate::page::{FormKind, FormReader, Navigator, Notifier, RequirementSink, fields};

/// Lifecycle of one form's submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Holds the submitter in `Submitting` until dropped.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmittingGuard(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Posts login and registration forms to the backend.
///
/// One request per form at a time: a submit issued while the same form has
/// one outstanding is refused with [`SubmitError::InProgress`]. The login
/// and registration forms are guarded independently.
pub struct CredentialSubmitter<A> {
    api: A,
    config: SubmitterConfig,
    login_submitting: AtomicBool,
    register_submitting: AtomicBool,
}

impl<A: AuthApi> CredentialSubmitter<A> {
    pub fn new(api: A, config: SubmitterConfig) -> Self {
        Self {
            api,
            config,
            login_submitting: AtomicBool::new(false),
            register_submitting: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    fn submitting(&self, form: FormKind) -> &AtomicBool {
        match form {
            FormKind::Login => &self.login_submitting,
            FormKind::Register => &self.register_submitting,
        }
    }

    pub fn state(&self, form: FormKind) -> SubmitState {
        if self.submitting(form).load(Ordering::Acquire) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    /// Reads the login form and submits it.
    pub async fn handle_login_form<F, P>(&self, form: &F, page: &P) -> Result<String, SubmitError>
    where
        F: FormReader + ?Sized,
        P: Navigator + Notifier + ?Sized,
    {
        let credentials = Credentials::new(
            read_field(form, fields::EMAIL),
            read_password(form),
        );
        self.submit_login(credentials, page).await
    }

    /// Reads the registration form and submits it.
    pub async fn handle_register_form<F, P>(
        &self,
        form: &F,
        page: &P,
    ) -> Result<String, SubmitError>
    where
        F: FormReader + ?Sized,
        P: Navigator + Notifier + RequirementSink + ?Sized,
    {
        let registration = RegistrationFields {
            username: read_field(form, fields::USERNAME),
            firstname: form.field_value(fields::FIRSTNAME),
            lastname: form.field_value(fields::LASTNAME),
            email: read_field(form, fields::EMAIL),
            password: read_password(form),
        };
        self.submit_register(registration, page).await
    }

    /// Posts the credentials to the login endpoint.
    ///
    /// # Returns
    /// The route navigated to on success. Every error has already been
    /// surfaced on the page, except [`SubmitError::InProgress`].
    pub async fn submit_login<P>(
        &self,
        credentials: Credentials,
        page: &P,
    ) -> Result<String, SubmitError>
    where
        P: Navigator + Notifier + ?Sized,
    {
        let Some(_guard) = SubmittingGuard::acquire(self.submitting(FormKind::Login)) else {
            #[cfg(feature = "tracing")]
            tracing::warn!("login submit ignored: a submission is already in progress");
            return Err(SubmitError::InProgress);
        };

        page.clear_error(FormKind::Login);

        #[cfg(feature = "tracing")]
        tracing::debug!("submitting login");

        let response = self.api.login(&credentials).await;
        Self::finish(
            FormKind::Login,
            response,
            &self.config.login_redirect,
            page,
        )
    }

    /// Posts a registration, provided the password passes the policy.
    ///
    /// A password that fails the policy aborts before any request; the
    /// requirement indicators are the only feedback.
    pub async fn submit_register<P>(
        &self,
        registration: RegistrationFields,
        page: &P,
    ) -> Result<String, SubmitError>
    where
        P: Navigator + Notifier + RequirementSink + ?Sized,
    {
        let Some(_guard) = SubmittingGuard::acquire(self.submitting(FormKind::Register)) else {
            #[cfg(feature = "tracing")]
            tracing::warn!("registration submit ignored: a submission is already in progress");
            return Err(SubmitError::InProgress);
        };

        if !reflect_requirements(&registration.password, page) {
            let result = evaluate_password(&registration.password);
            #[cfg(feature = "tracing")]
            tracing::debug!("registration blocked by password policy: {:?}", result.failed_rules());
            return Err(SubmitError::Validation(result));
        }

        page.clear_error(FormKind::Register);

        #[cfg(feature = "tracing")]
        tracing::debug!("submitting registration");

        let request = registration.into_request(self.config.registration_schema);
        let response = self.api.register(&request).await;
        Self::finish(
            FormKind::Register,
            response,
            &self.config.register_redirect,
            page,
        )
    }

    fn finish<P>(
        form: FormKind,
        response: Result<ApiResponse, TransportError>,
        redirect: &str,
        page: &P,
    ) -> Result<String, SubmitError>
    where
        P: Navigator + Notifier + ?Sized,
    {
        match response {
            Ok(data) if data.success => {
                #[cfg(feature = "tracing")]
                tracing::info!("{:?} succeeded, navigating to {}", form, redirect);
                page.navigate_replace(redirect);
                Ok(redirect.to_string())
            }
            Ok(data) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("{:?} rejected: {}", form, data.message);
                page.show_error(
                    form,
                    &format!("{}: {}", form.failure_prefix(), data.message),
                );
                Err(SubmitError::Rejected {
                    message: data.message,
                })
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("{:?} request failed: {}", form, e);
                page.show_error(form, form.generic_error());
                Err(SubmitError::Transport(e))
            }
        }
    }
}

fn read_field<F: FormReader + ?Sized>(form: &F, name: &str) -> String {
    form.field_value(name).unwrap_or_default()
}

fn read_password<F: FormReader + ?Sized>(form: &F) -> SecretString {
    SecretString::new(read_field(form, fields::PASSWORD).into())
}

/// Input handler for the password field: refreshes the requirement
/// indicators from the field's current value.
pub fn handle_password_input<F, S>(form: &F, sink: &S) -> bool
where
    F: FormReader + ?Sized,
    S: RequirementSink + ?Sized,
{
    reflect_requirements(&read_password(form), sink)
}
