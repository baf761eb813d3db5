use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::Key;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more required keys have no value.
    #[error("Missing required environment variables: {}", KeyList(.0))]
    MissingRequired(Vec<Key>),

    /// An explicitly requested `.env` file could not be read.
    #[error("Failed to read {}", path.display())]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// An explicitly requested `.env` file contains a line that does not parse.
    #[error("Failed to parse {}", path.display())]
    EnvFileParse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub(crate) fn env_file(path: &Path, source: dotenvy::Error) -> Self {
        let path = path.to_path_buf();
        match source {
            dotenvy::Error::LineParse(..) => Self::EnvFileParse { path, source },
            source => Self::EnvFileRead { path, source },
        }
    }
}

/// Comma separated key names.
struct KeyList<'a>(&'a [Key]);

impl fmt::Display for KeyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
