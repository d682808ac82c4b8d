//! File-backed token storage, the durable equivalent of the browser's
//! single `authToken` key. The token is the whole content of one file,
//! created with owner-only permissions on unix.

use crate::session::error::Error;
use crate::store::TokenStore;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: &io::Error) -> Error {
        Error::Storage(format!("{action} {}: {err}", self.path.display()))
    }
}

impl TokenStore for FileStore {
    fn get(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim_end_matches('\n').to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.storage_error("failed to read", &err)),
        }
    }

    fn set(&mut self, token: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.storage_error("failed to create", &err))?;
        }

        fs::write(&self.path, token).map_err(|err| self.storage_error("failed to write", &err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|err| self.storage_error("failed to chmod", &err))?;
        }

        Ok(())
    }

    fn remove(&mut self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.storage_error("failed to remove", &err)),
        }
    }
}
