//! Navigation targets reachable from the sign-up page.

use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// The sign-up page itself.
    #[default]
    SignUp,
    AdminHome,
    StudentLogin,
    TeacherLogin,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::SignUp => "/signup",
            Self::AdminHome => "/admin/home",
            Self::StudentLogin => "/student-login",
            Self::TeacherLogin => "/teacher-login",
        }
    }
}

/// Moves the application to another page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Keeps the current route in memory; clones share it.
#[derive(Debug, Clone, Default)]
pub struct RouteRecorder {
    history: Arc<RwLock<Vec<Route>>>,
}

impl RouteRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.history()
            .last()
            .copied()
            .unwrap_or_default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.read().expect("lock poisoned").clone()
    }
}

impl Navigator for RouteRecorder {
    fn navigate(&self, route: Route) {
        self.history.write().expect("lock poisoned").push(route);
    }
}
