use serde::Deserialize;
use ustr::Ustr;

/// Environment variable that overrides the backend base URL.
pub const API_BASE_URL_ENV: &str = "CLASSROOM_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    classroom_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Builds the config from process environment variables, falling back to
    /// the compiled-in default when `CLASSROOM_API_BASE_URL` is unset.
    pub fn from_env() -> Result<Self, serde_env::Error> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, serde_env::Error>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Ok(match raw.classroom_api_base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim().trim_end_matches('/')),
            _ => Self::default(),
        })
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_test") {
                "https://classroom-test.example.com".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://classroom-nightly.example.com".to_owned()
            } else {
                "https://classroom.example.com".to_owned()
            },
        }
    }
}
