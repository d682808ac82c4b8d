//! Durable single-key storage for the session token.
//!
//! Storage is injected as a capability so the session manager can be
//! exercised without a real home directory or filesystem. [`FileStore`] is
//! the production implementation; [`MemoryStore`] backs tests and embedders
//! that keep sessions process-local.

use crate::session::error::Error;

pub mod file;

pub use file::FileStore;

/// Key-value capability holding at most one persisted token.
pub trait TokenStore {
    /// # Errors
    /// Returns an error if the store cannot be read.
    fn get(&self) -> Result<Option<String>, Error>;

    /// # Errors
    /// Returns an error if the token cannot be written.
    fn set(&mut self, token: &str) -> Result<(), Error>;

    /// Removes the persisted token. Removing an absent token is not an error.
    /// # Errors
    /// Returns an error if the store cannot be written.
    fn remove(&mut self) -> Result<(), Error>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if a previous run had persisted it.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, Error> {
        Ok(self.token.clone())
    }

    fn set(&mut self, token: &str) -> Result<(), Error> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), Error> {
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get().unwrap(), None);

        store.set("abc").unwrap();
        assert_eq!(store.get().unwrap(), Some("abc".to_string()));

        store.remove().unwrap();
        assert_eq!(store.get().unwrap(), None);

        // Removing again is fine
        store.remove().unwrap();
    }

    #[test]
    fn test_memory_store_with_token() {
        let store = MemoryStore::with_token("abc");
        assert_eq!(store.get().unwrap(), Some("abc".to_string()));
    }
}
