use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use classroom_business::API_BASE_URL_ENV;

#[derive(Parser)]
#[command(name = "classroom")]
#[command(about = "Sign up for Classroom from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (the `/api` prefix is added automatically)
    #[arg(long, global = true, env = API_BASE_URL_ENV)]
    pub api_url: Option<String>,

    /// Session file to use instead of the platform config location
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new admin, student or teacher account
    Register(RegisterArgs),
    /// Show the saved session
    Session,
    /// Remove the saved session
    Logout,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct RegisterArgs {
    /// Role to register as: admin, student or teacher
    #[arg(long, short = 'r', default_value = "admin")]
    pub role: String,

    #[arg(long)]
    pub firstname: Option<String>,

    #[arg(long)]
    pub lastname: Option<String>,

    #[arg(long, short = 'u')]
    pub username: Option<String>,

    #[arg(long, short = 'e')]
    pub email: Option<String>,
}
