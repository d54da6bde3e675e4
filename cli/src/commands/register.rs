//! `classroom register`.

use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, bail};
use classroom_business::{
    BusinessConfig, Field, HttpRegistrationApi, KeyValueStore, Navigator, Notifier,
    RegistrationApi, RegistrationController, RegistrationError, RegistrationForm,
    RegistrationOutcome,
};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::{info, instrument, warn};

use crate::cli::RegisterArgs;
use crate::output::Output;
use crate::store::FileStore;

#[instrument(skip_all, name = "register", fields(role = %args.role))]
pub async fn run_register(
    config: BusinessConfig,
    store: FileStore,
    args: RegisterArgs,
) -> Result<()> {
    let out = Output::new();
    let store_path = store.path().to_path_buf();

    out.header(format!("Classroom sign-up ({})", args.role));
    out.newline();

    let mut controller = RegistrationController::new(
        HttpRegistrationApi::new(config),
        store,
        out.clone(),
        out.clone(),
    );

    let interactive = std::io::stdin().is_terminal();
    fill_form(controller.form_mut(), &args, |field| {
        if !interactive {
            bail!(
                "Cannot prompt for {}: stdin is not a terminal",
                field.label()
            );
        }
        prompt(field)
    })?;

    let outcome = submit(&mut controller, &args.role, &out).await?;
    out.dim(format!("Session saved to {}", store_path.display()));
    info!(route = outcome.route.path(), "Registration complete");
    Ok(())
}

/// Copies the values given on the command line into `form` and asks for the
/// rest. Passwords are never taken from arguments.
pub fn fill_form(
    form: &mut RegistrationForm,
    args: &RegisterArgs,
    mut ask: impl FnMut(Field) -> Result<String>,
) -> Result<()> {
    for field in Field::ALL {
        let given = match field {
            Field::Firstname => args.firstname.as_deref(),
            Field::Lastname => args.lastname.as_deref(),
            Field::Username => args.username.as_deref(),
            Field::Email => args.email.as_deref(),
            Field::Password | Field::ConfirmPassword => None,
        };
        let value = match given {
            Some(value) => value.to_owned(),
            None => ask(field)?,
        };
        form.set(field, value);
    }
    Ok(())
}

fn prompt(field: Field) -> Result<String> {
    let label = format!("{}:", field.label());
    let value = if field.is_secret() {
        Password::new(&label)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()
    } else {
        Text::new(&label).prompt()
    };
    value.with_context(|| format!("Failed to read {}", field.label()))
}

/// Runs the submission and turns a failure into a CLI error.
///
/// The controller has already shown a toast for every failure except an
/// unsupported role, which is reported here.
pub async fn submit<A, S, N, V>(
    controller: &mut RegistrationController<A, S, N, V>,
    role: &str,
    out: &Output,
) -> Result<RegistrationOutcome>
where
    A: RegistrationApi,
    S: KeyValueStore,
    N: Notifier,
    V: Navigator,
{
    match controller.handle_registration(role).await {
        Ok(outcome) => Ok(outcome),
        Err(RegistrationError::UnsupportedRole(e)) => {
            warn!("Registration skipped: {e}");
            out.warning(format!(
                "No registration endpoint for role {role:?}; nothing was sent."
            ));
            Err(e).context("Registration was not submitted")
        }
        Err(e) => Err(e).context("Registration failed"),
    }
}
