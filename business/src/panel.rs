//! Registration panels.
//!
//! A panel is both the tab shown on the sign-up page and the role sent to
//! the backend. Parsing is exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use crate::route::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Admin,
    Student,
    Teacher,
}

/// A panel name outside `admin`, `student` and `teacher`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported registration role: {0:?}")]
pub struct UnsupportedRole(pub String);

impl Panel {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Student, Self::Teacher];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Student => "Student",
            Self::Teacher => "Teacher",
        }
    }

    /// Where the user goes after the backend accepted the registration.
    pub fn success_route(self) -> Route {
        match self {
            Self::Admin => Route::AdminHome,
            Self::Student => Route::StudentLogin,
            Self::Teacher => Route::TeacherLogin,
        }
    }

    pub fn success_message(self) -> String {
        format!("{} registration successful!", self.title())
    }

    pub fn failure_message(self) -> String {
        format!("{} registration failed. Please try again.", self.title())
    }
}

impl FromStr for Panel {
    type Err = UnsupportedRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|panel| panel.as_str() == s)
            .ok_or_else(|| UnsupportedRole(s.to_owned()))
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
