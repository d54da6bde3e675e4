//! Test doubles for the sign-up controller.

#![cfg(test)]

use std::sync::{Arc, Mutex};

use crate::api::{ApiError, RegistrationApi, RegistrationRequest, RegistrationResponse};
use crate::form::RegistrationForm;
use crate::panel::Panel;
use crate::storage::{KeyValueStore, StoreError};

/// A form that passes validation, with matching passwords `secret`.
pub fn filled_form() -> RegistrationForm {
    RegistrationForm {
        firstname: "Ada".to_owned(),
        lastname: "Lovelace".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
    }
}

/// Backend double that records every call and answers with a fixed result.
#[derive(Clone)]
pub struct StubRegistrationApi {
    token: Option<String>,
    calls: Arc<Mutex<Vec<(Panel, RegistrationRequest)>>>,
}

impl StubRegistrationApi {
    pub fn succeeding(token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            token: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(Panel, RegistrationRequest)> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn answer(
        &self,
        panel: Panel,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((panel, request.clone()));

        match &self.token {
            Some(token) => Ok(RegistrationResponse {
                token: token.clone(),
            }),
            None => Err(ApiError::Status {
                status: 409,
                message: "username already taken".to_owned(),
            }),
        }
    }
}

impl RegistrationApi for StubRegistrationApi {
    async fn admin_register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.answer(Panel::Admin, request)
    }

    async fn student_register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.answer(Panel::Student, request)
    }

    async fn teacher_register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        self.answer(Panel::Teacher, request)
    }
}

/// Store whose writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk full".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<bool, StoreError> {
        Ok(false)
    }
}
