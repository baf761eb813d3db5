//! Credentials for the X API, read from the environment.
//!
//! ```no_run
//! let config = xconfig::Config::load();
//! config.validate()?;
//! # Ok::<(), xconfig::ConfigError>(())
//! ```

mod config;
pub mod env;
mod error;
mod status;

pub use config::{Config, Key};
pub use error::ConfigError;
pub use status::{Presence, Status};
