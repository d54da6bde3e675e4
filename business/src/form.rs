//! Sign-up form state and validation.
//!
//! All six fields are required. A field is "empty" only when its value has
//! zero length; whitespace is kept as typed. The email field additionally has
//! to look like an address (see [`is_valid_email`]).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a whole address.
const EMAIL_MAX_LEN: usize = 254;
/// Maximum length of the part before `@`.
const EMAIL_LOCAL_MAX_LEN: usize = 64;

/// Dot-atom local part, `@`, and dot-separated hostname labels.
///
/// A top-level domain is not required: `admin@localhost` is accepted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Returns true when `email` is a syntactically valid address.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LEN {
        return false;
    }
    match email.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LEN => EMAIL_REGEX.is_match(email),
        _ => false,
    }
}

/// The fields of the sign-up form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Firstname,
    Lastname,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Firstname,
        Self::Lastname,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// The form control name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Firstname => "firstname",
            Self::Lastname => "lastname",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human label used by prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Firstname => "First name",
            Self::Lastname => "Last name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::InvalidEmail => write!(f, "{} is not a valid email address", self.field),
        }
    }
}

/// Current values of the sign-up form. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Firstname => &self.firstname,
            Field::Lastname => &self.lastname,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Firstname => &mut self.firstname,
            Field::Lastname => &mut self.lastname,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Every failing constraint, in field order.
    pub fn errors(&self) -> Vec<FieldError> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.get(field);
                let kind = if value.is_empty() {
                    FieldErrorKind::Required
                } else if field == Field::Email && !is_valid_email(value) {
                    FieldErrorKind::InvalidEmail
                } else {
                    return None;
                };
                Some(FieldError { field, kind })
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            firstname: "Ada".to_owned(),
            lastname: "Lovelace".to_owned(),
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "secret".to_owned(),
            confirm_password: "secret".to_owned(),
        }
    }

    #[test]
    fn test_new_form_reports_every_field_required() {
        let form = RegistrationForm::new();
        let errors = form.errors();

        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|e| e.kind == FieldErrorKind::Required));
        assert!(!form.is_valid());
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn test_single_missing_field_is_reported() {
        let mut form = filled();
        form.set(Field::Lastname, "");

        assert_eq!(
            form.errors(),
            vec![FieldError {
                field: Field::Lastname,
                kind: FieldErrorKind::Required,
            }]
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(Field::Firstname, "  ");
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_email_is_only_required() {
        let mut form = filled();
        form.set(Field::Email, "");

        let errors = form.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FieldErrorKind::Required);
    }

    #[test]
    fn test_malformed_email_is_reported() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");

        assert_eq!(
            form.errors(),
            vec![FieldError {
                field: Field::Email,
                kind: FieldErrorKind::InvalidEmail,
            }]
        );
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("admin@localhost"));
        assert!(is_valid_email("o'brien@school-district.edu"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email(".ada@example.com"));
        assert!(!is_valid_email("ada..lovelace@example.com"));
        assert!(!is_valid_email("ada@-example.com"));
        assert!(!is_valid_email("ada@example-.com"));
        assert!(!is_valid_email("ada lovelace@example.com"));
    }

    #[test]
    fn test_email_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&long_local));

        let max_local = format!("{}@example.com", "a".repeat(64));
        assert!(is_valid_email(&max_local));

        let long_domain = format!("a@{}.com", vec!["b".repeat(60); 5].join("."));
        assert!(long_domain.len() > 254);
        assert!(!is_valid_email(&long_domain));
    }

    #[test]
    fn test_field_names_match_form_controls() {
        let names: Vec<_> = Field::ALL.into_iter().map(Field::name).collect();
        assert_eq!(
            names,
            vec![
                "firstname",
                "lastname",
                "username",
                "email",
                "password",
                "confirmPassword"
            ]
        );
    }

    #[test]
    fn test_set_and_get_round_through_every_field() {
        let mut form = RegistrationForm::new();
        for field in Field::ALL {
            form.set(field, field.name());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.name());
        }
    }
}
