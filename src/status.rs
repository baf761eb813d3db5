use std::fmt;

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeStruct},
};

use crate::Key;

/// Whether a key has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Presence {
    Set,
    #[serde(rename = "Not set")]
    NotSet,
}

impl From<bool> for Presence {
    fn from(set: bool) -> Self {
        if set { Self::Set } else { Self::NotSet }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Set => write!(f, "Set"),
            Self::NotSet => write!(f, "Not set"),
        }
    }
}

/// Presence of every key, keyed by environment variable.
///
/// Serializes to `{"envVars": {"X_API_KEY": "Set", ...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    entries: Vec<(Key, Presence)>,
}

impl Status {
    #[must_use]
    pub fn entries(&self) -> &[(Key, Presence)] {
        &self.entries
    }
}

impl FromIterator<(Key, Presence)> for Status {
    fn from_iter<I: IntoIterator<Item = (Key, Presence)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, presence) in &self.entries {
            writeln!(f, "{}: {presence}", key.env_var())?;
        }
        Ok(())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Status", 1)?;
        state.serialize_field("envVars", &EnvVars(&self.entries))?;
        state.end()
    }
}

/// Keeps record order, which a map type would not.
struct EnvVars<'a>(&'a [(Key, Presence)]);

impl Serialize for EnvVars<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, presence) in self.0 {
            map.serialize_entry(key.env_var(), presence)?;
        }
        map.end()
    }
}
