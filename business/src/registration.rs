//! Sign-up controller.
//!
//! [`RegistrationController`] owns the sign-up form and the active panel, and
//! runs a submission against injected collaborators:
//!
//! - [`RegistrationApi`]: the three role-specific backend endpoints
//! - [`KeyValueStore`]: durable storage for `username`, `email` and `token`
//! - [`Notifier`]: success and error toasts
//! - [`Navigator`]: page changes after a successful registration
//!
//! ## Submission flow
//!
//! 1. Reject an invalid form (missing field or malformed email)
//! 2. Hash `password` and `confirmPassword` independently with SHA-512 and
//!    compare the digests
//! 3. Store `username` and `email`
//! 4. Resolve the role; unknown roles stop here without a toast
//! 5. Call the endpoint for the role
//! 6. On success store `token` and navigate; on failure show the role's
//!    failure toast
//!
//! Username and email stay in storage when the backend call fails.

use log::{error, info, warn};

use crate::api::{ApiError, RegistrationApi, RegistrationRequest};
use crate::digest::sha512_hex;
use crate::form::{Field, FieldError, RegistrationForm};
use crate::notify::Notifier;
use crate::panel::{Panel, UnsupportedRole};
use crate::route::{Navigator, Route};
use crate::storage::{KeyValueStore, StoreError, keys};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all the required fields.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("invalid form: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    UnsupportedRole(#[from] UnsupportedRole),

    #[error("{panel} registration failed: {source}")]
    Backend { panel: Panel, source: ApiError },

    #[error("failed to save session: {0}")]
    Storage(#[from] StoreError),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub panel: Panel,
    pub token: String,
    pub route: Route,
}

pub struct RegistrationController<A, S, N, V> {
    api: A,
    store: S,
    notifier: N,
    navigator: V,
    form: RegistrationForm,
    current_panel: Panel,
}

impl<A, S, N, V> RegistrationController<A, S, N, V>
where
    A: RegistrationApi,
    S: KeyValueStore,
    N: Notifier,
    V: Navigator,
{
    /// Creates a controller with an empty form on the admin panel.
    pub fn new(api: A, store: S, notifier: N, navigator: V) -> Self {
        Self {
            api,
            store,
            notifier,
            navigator,
            form: RegistrationForm::new(),
            current_panel: Panel::default(),
        }
    }

    pub fn current_panel(&self) -> Panel {
        self.current_panel
    }

    /// Switches the visible panel. `None` or an empty name selects admin;
    /// an unknown name keeps the current panel.
    pub fn show_panel(&mut self, panel: Option<&str>) -> Panel {
        match panel.filter(|name| !name.is_empty()) {
            None => self.current_panel = Panel::Admin,
            Some(name) => match name.parse::<Panel>() {
                Ok(panel) => self.current_panel = panel,
                Err(e) => warn!("RegistrationController: ignoring panel switch: {e}"),
            },
        }
        self.current_panel
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Submits the form for `panel`.
    ///
    /// `panel` is sent as the request role as-is; it does not have to match
    /// [`current_panel`](Self::current_panel). Every error except
    /// [`RegistrationError::UnsupportedRole`] has already been shown to the
    /// user through the notifier when this returns.
    pub async fn handle_registration(
        &mut self,
        panel: &str,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let field_errors = self.form.errors();
        if !field_errors.is_empty() {
            info!(
                "RegistrationController: form invalid: {}",
                join_field_errors(&field_errors)
            );
            self.notifier.error(REQUIRED_FIELDS_MESSAGE);
            return Err(RegistrationError::Validation(field_errors));
        }

        // Digests are compared, not the raw inputs.
        let password = sha512_hex(&self.form.password);
        let confirm_password = sha512_hex(&self.form.confirm_password);
        if password != confirm_password {
            info!("RegistrationController: password confirmation does not match");
            self.notifier.error(PASSWORD_MISMATCH_MESSAGE);
            return Err(RegistrationError::PasswordMismatch);
        }

        self.persist(keys::USERNAME, &self.form.username)?;
        self.persist(keys::EMAIL, &self.form.email)?;

        let role = match panel.parse::<Panel>() {
            Ok(role) => role,
            Err(e) => {
                warn!("RegistrationController: no endpoint for role, nothing sent: {e}");
                return Err(e.into());
            }
        };

        let request = RegistrationRequest {
            firstname: self.form.firstname.clone(),
            lastname: self.form.lastname.clone(),
            username: self.form.username.clone(),
            email: self.form.email.clone(),
            password,
            role: panel.to_owned(),
        };

        info!(
            "RegistrationController: submitting {role} registration for '{}'",
            request.username
        );

        let result = match role {
            Panel::Admin => self.api.admin_register(&request).await,
            Panel::Student => self.api.student_register(&request).await,
            Panel::Teacher => self.api.teacher_register(&request).await,
        };

        match result {
            Ok(response) => {
                info!(
                    "RegistrationController: {role} registration succeeded for '{}'",
                    request.username
                );
                self.notifier.success(role.success_message());
                self.persist(keys::TOKEN, &response.token)?;

                let route = role.success_route();
                self.navigator.navigate(route);

                Ok(RegistrationOutcome {
                    panel: role,
                    token: response.token,
                    route,
                })
            }
            Err(source) => {
                error!("RegistrationController: {role} registration failed: {source}");
                self.notifier.error(role.failure_message());
                Err(RegistrationError::Backend {
                    panel: role,
                    source,
                })
            }
        }
    }

    fn persist(&self, key: &str, value: &str) -> Result<(), RegistrationError> {
        self.store.set(key, value).map_err(|e| {
            error!("RegistrationController: failed to store '{key}': {e}");
            self.notifier.error(format!("Could not save {key}: {e}"));
            RegistrationError::Storage(e)
        })
    }
}
