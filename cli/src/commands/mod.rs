//! Command implementations for the Classroom CLI.

pub mod completions;
pub mod register;
pub mod session;

pub use completions::generate_completions;
pub use register::run_register;
pub use session::{logout, show_session};
