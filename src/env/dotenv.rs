use std::{
    collections::HashMap,
    env::VarError,
    path::{Path, PathBuf},
};

use crate::{ConfigError, env::ReadEnv};

/// A `.env` file layered beneath another source.
///
/// Variables from the file only fill gaps: whenever the inner source knows a variable, even as
/// an empty string, its value wins. The process environment itself is never modified.
///
/// `$VAR` and `${VAR}` in file values are expanded by `dotenvy` while parsing. Expansion looks
/// at the process environment first and earlier entries of the same file second; it never
/// consults `inner`. A file that uses substitution therefore still depends on the process
/// environment, whatever `inner` is.
#[derive(Clone)]
pub struct DotenvEnv<E> {
    inner: E,
    path: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl<E: ReadEnv> DotenvEnv<E> {
    const FILENAME: &'static str = ".env";

    /// Search `directory` and its ancestors for a `.env` file.
    ///
    /// The first file found is used. Finding no file is fine and yields a source that behaves
    /// exactly like `inner`. Lines that cannot be parsed are skipped.
    #[must_use]
    pub fn discover(directory: impl AsRef<Path>, inner: E) -> Self {
        let Some(path) = Self::find(directory) else {
            log::debug!("No {} file found", Self::FILENAME);
            return Self::empty(inner);
        };

        let vars = parse_lenient(&path);
        Self {
            inner,
            path: Some(path),
            vars,
        }
    }

    /// Read the `.env` file at `path`.
    ///
    /// Unlike [`DotenvEnv::discover`], the file has to exist and has to parse.
    pub fn from_file(path: impl AsRef<Path>, inner: E) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let env_file_error = |source| ConfigError::env_file(path, source);

        let vars = dotenvy::from_path_iter(path)
            .map_err(env_file_error)?
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(env_file_error)?;

        log::debug!("Read {} variables from {}", vars.len(), path.display());

        Ok(Self {
            inner,
            path: Some(path.to_path_buf()),
            vars,
        })
    }

    /// A source without any `.env` file.
    #[must_use]
    pub fn empty(inner: E) -> Self {
        Self {
            inner,
            path: None,
            vars: HashMap::new(),
        }
    }

    /// The `.env` file in use, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn find(directory: impl AsRef<Path>) -> Option<PathBuf> {
        // A relative path would stop the walk at the working directory.
        let directory = std::path::absolute(directory.as_ref())
            .unwrap_or_else(|_| directory.as_ref().to_path_buf());
        directory
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
    }
}

impl<E: ReadEnv> ReadEnv for DotenvEnv<E> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        match self.inner.var(key) {
            Err(VarError::NotPresent) => self.vars.get(key).cloned().ok_or(VarError::NotPresent),
            result => result,
        }
    }
}

fn parse_lenient(path: &Path) -> HashMap<String, String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) => {
            log::warn!("Failed to read {}: {err}", path.display());
            return HashMap::new();
        }
    };

    let mut vars = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(dotenvy::Error::Io(err)) => {
                log::warn!("Failed to read {}: {err}", path.display());
                break;
            }
            Err(err) => log::warn!("Skipping invalid line in {}: {err}", path.display()),
        }
    }

    log::debug!("Read {} variables from {}", vars.len(), path.display());

    vars
}
