//! Sources the configuration is read from.
//!
//! [`Config::from_env`](crate::Config::from_env) accepts anything implementing [`ReadEnv`], so
//! the process environment can be swapped for a fixed set of variables in tests.
//!
//! ```
//! use xconfig::{Config, env::InMemoryEnv};
//!
//! let env = InMemoryEnv::from_iter([
//!     ("X_API_KEY", "a"),
//!     ("X_API_SECRET", "b"),
//!     ("X_BEARER_TOKEN", "c"),
//! ]);
//!
//! assert!(Config::from_env(&env).validate().is_ok());
//! ```

mod dotenv;

use std::{collections::HashMap, env::VarError};

pub use dotenv::DotenvEnv;

/// Read access to a set of environment variables.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// A fixed set of variables held in memory.
#[derive(Clone, Default)]
pub struct InMemoryEnv {
    vars: HashMap<String, String>,
}

impl InMemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}
