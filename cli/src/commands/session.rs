//! `classroom session` and `classroom logout`.

use anyhow::Result;
use classroom_business::{KeyValueStore, storage::keys};
use tracing::{info, instrument};

use crate::output::Output;
use crate::store::FileStore;

/// Values saved by a previous registration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SavedSession {
    pub username: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
}

impl SavedSession {
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        Ok(Self {
            username: store.get(keys::USERNAME)?,
            email: store.get(keys::EMAIL)?,
            token: store.get(keys::TOKEN)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.token.is_none()
    }
}

#[instrument(skip_all, name = "session")]
pub fn show_session(store: &FileStore) -> Result<()> {
    let out = Output::new();
    let session = SavedSession::load(store)?;

    if session.is_empty() {
        out.info("No saved session.");
        out.dim("Use 'classroom register' to create an account.");
        return Ok(());
    }

    out.header("Saved session");
    out.labeled_indent("Username", session.username.as_deref().unwrap_or("-"), 2);
    out.labeled_indent("Email", session.email.as_deref().unwrap_or("-"), 2);
    out.labeled_indent(
        "Token",
        if session.token.is_some() {
            "present"
        } else {
            "missing (registration did not complete)"
        },
        2,
    );
    out.dim(format!("Session file: {}", store.path().display()));
    Ok(())
}

/// Removes every session key; returns how many were present.
pub fn clear_session(store: &impl KeyValueStore) -> Result<usize> {
    let mut removed = 0;
    for key in keys::SESSION {
        if store.remove(key)? {
            removed += 1;
        }
    }
    Ok(removed)
}

#[instrument(skip_all, name = "logout")]
pub fn logout(store: &FileStore) -> Result<()> {
    let out = Output::new();
    let removed = clear_session(store)?;

    if removed == 0 {
        out.info("Not signed up on this machine.");
    } else {
        info!(removed, "Session cleared");
        out.success("Session removed");
        out.dim(format!("Session file: {}", store.path().display()));
    }
    Ok(())
}
