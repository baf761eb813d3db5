use std::{env::VarError, fmt, sync::OnceLock};

use crate::{
    ConfigError, Presence, Status,
    env::{DotenvEnv, ReadEnv, SystemEnv},
};

/// A key of the configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ApiKey,
    ApiSecret,
    BearerToken,
    AccessToken,
    AccessSecret,
    CommunityId,
}

impl Key {
    /// All keys in record order.
    pub const ALL: [Self; 6] = [
        Self::ApiKey,
        Self::ApiSecret,
        Self::BearerToken,
        Self::AccessToken,
        Self::AccessSecret,
        Self::CommunityId,
    ];

    /// Keys that must have a value for the configuration to be valid.
    pub const REQUIRED: [Self; 3] = [Self::ApiKey, Self::ApiSecret, Self::BearerToken];

    /// The name of the key in the record.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::ApiSecret => "api_secret",
            Self::BearerToken => "bearer_token",
            Self::AccessToken => "access_token",
            Self::AccessSecret => "access_secret",
            Self::CommunityId => "community_id",
        }
    }

    /// The environment variable the key is read from.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ApiKey => "X_API_KEY",
            Self::ApiSecret => "X_API_SECRET",
            Self::BearerToken => "X_BEARER_TOKEN",
            Self::AccessToken => "X_ACCESS_TOKEN",
            Self::AccessSecret => "X_ACCESS_SECRET",
            Self::CommunityId => "X_COMMUNITY_ID",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Credentials and identifiers for the X API.
///
/// Every key is optional when reading. Use [`Config::validate`] to make sure the required keys
/// are present before talking to the API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: [Option<String>; Key::ALL.len()],
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// A `.env` file in the current directory or one of its ancestors fills in variables that
    /// are not set in the environment.
    #[must_use]
    pub fn load() -> Self {
        let env = match std::env::current_dir() {
            Ok(directory) => DotenvEnv::discover(directory, SystemEnv),
            Err(err) => {
                log::debug!("Not searching for a .env file: {err}");
                DotenvEnv::empty(SystemEnv)
            }
        };
        Self::from_env(&env)
    }

    /// The configuration of this process.
    ///
    /// Loaded on first access via [`Config::load`] and never changed afterwards.
    #[must_use]
    pub fn global() -> &'static Self {
        static CONFIG: OnceLock<Config> = OnceLock::new();
        CONFIG.get_or_init(Self::load)
    }

    /// Read the configuration from an arbitrary source.
    ///
    /// Unset and empty variables both end up as absent values.
    #[must_use]
    pub fn from_env(env: &impl ReadEnv) -> Self {
        let mut config = Self::default();
        for key in Key::ALL {
            config.values[key.index()] = match env.var(key.env_var()) {
                Ok(value) if !value.is_empty() => Some(value),
                Ok(_) | Err(VarError::NotPresent) => None,
                Err(VarError::NotUnicode(_)) => {
                    log::debug!("Ignoring {}: not valid unicode", key.env_var());
                    None
                }
            };
        }
        config
    }

    #[must_use]
    pub fn get(&self, key: Key) -> Option<&str> {
        self.values[key.index()].as_deref()
    }

    /// Get the value of a key that has to be present.
    pub fn require(&self, key: Key) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingRequired(vec![key]))
    }

    /// Required keys without a value, in record order.
    #[must_use]
    pub fn missing(&self) -> Vec<Key> {
        Key::ALL
            .into_iter()
            .filter(|key| key.is_required() && self.get(*key).is_none())
            .collect()
    }

    /// Check that all required keys have a value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingRequired(missing))
        }
    }

    /// Which keys are set, without revealing their values.
    #[must_use]
    pub fn status(&self) -> Status {
        Key::ALL
            .into_iter()
            .map(|key| (key, Presence::from(self.get(key).is_some())))
            .collect()
    }
}

// Values are secrets.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for key in Key::ALL {
            map.entry(&key.name(), &Presence::from(self.get(key).is_some()));
        }
        map.finish()
    }
}
