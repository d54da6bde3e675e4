//! Business logic for Classroom sign-up.
//!
//! The entry point is [`RegistrationController`]; everything it talks to is a
//! trait so that front-ends (and tests) plug in their own storage, toasts,
//! navigation and backend.

mod api;
mod config;
mod digest;
mod form;
pub mod http;
mod notify;
mod panel;
mod registration;
mod route;
pub mod storage;
mod test_utils;

pub use api::{
    ApiError, HttpRegistrationApi, RegistrationApi, RegistrationRequest, RegistrationResponse,
    endpoint_path,
};
pub use config::{API_BASE_URL_ENV, BusinessConfig};
pub use digest::sha512_hex;
pub use form::{Field, FieldError, FieldErrorKind, RegistrationForm, is_valid_email};
pub use notify::{Notification, NotificationLog, Notifier};
pub use panel::{Panel, UnsupportedRole};
pub use registration::{
    PASSWORD_MISMATCH_MESSAGE, REQUIRED_FIELDS_MESSAGE, RegistrationController, RegistrationError,
    RegistrationOutcome,
};
pub use route::{Navigator, Route, RouteRecorder};
pub use storage::{KeyValueStore, MemoryStore, StoreError};
