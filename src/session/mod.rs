//! Client-side authentication session lifecycle.
//!
//! The [`SessionManager`] owns the only mutable session state: an optional
//! bearer token and an optional cached profile. It moves between exactly two
//! states, logged out and logged in; every validation failure collapses back
//! to logged out and clears the persisted token (fail-closed).

pub mod client;
pub mod error;
pub mod types;

pub use client::AuthClient;
pub use error::Error;
pub use types::{TokenResponse, UserProfile};

use crate::store::TokenStore;
use secrecy::SecretString;
use tracing::debug;

pub struct SessionManager<S: TokenStore> {
    client: AuthClient,
    store: S,
    token: Option<String>,
    user: Option<UserProfile>,
}

impl<S: TokenStore> SessionManager<S> {
    /// Builds a manager, picking up any token persisted by a previous run.
    /// The token is not validated here; call [`Self::resume`] for that.
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn new(client: AuthClient, store: S) -> Result<Self, Error> {
        let token = store.get()?;

        Ok(Self {
            client,
            store,
            token,
            user: None,
        })
    }

    /// Exchange credentials for a token without touching session state.
    /// # Errors
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn exchange_credentials(
        &self,
        email: &str,
        secret: &SecretString,
    ) -> Result<String, Error> {
        self.client.exchange_credentials(email, secret).await
    }

    /// Exchange credentials, persist the token, and validate it against the
    /// profile endpoint. A profile failure after a successful exchange
    /// collapses straight back to logged out.
    /// # Errors
    /// Returns an error if the exchange is rejected, the token cannot be
    /// persisted, or the profile lookup fails.
    pub async fn login(&mut self, email: &str, secret: &SecretString) -> Result<UserProfile, Error> {
        let token = self.client.exchange_credentials(email, secret).await?;

        self.store.set(&token)?;
        self.token = Some(token);

        debug!("credential exchange succeeded, validating session");

        self.fetch_profile().await
    }

    /// Fetches and caches the profile for the held token. Fail-closed: any
    /// failure clears the session and the persisted token.
    /// # Errors
    /// Returns [`Error::NotLoggedIn`] when no token is held, or
    /// [`Error::SessionInvalid`] when the token fails validation.
    pub async fn fetch_profile(&mut self) -> Result<UserProfile, Error> {
        let Some(token) = self.token.clone() else {
            return Err(Error::NotLoggedIn);
        };

        match self.client.fetch_profile(&token).await {
            Ok(profile) => {
                self.user = Some(profile.clone());
                Ok(profile)
            }
            Err(err) => {
                debug!("profile lookup failed, clearing session: {err}");
                self.logout();
                Err(Error::SessionInvalid)
            }
        }
    }

    /// Create an account, then attempt a login with the same credentials as
    /// a convenience. An auto-login failure does not demote the registration
    /// itself; the created profile is still returned.
    /// # Errors
    /// Returns an error if the registration request fails or is rejected.
    pub async fn register(
        &mut self,
        email: &str,
        secret: &SecretString,
        full_name: Option<&str>,
    ) -> Result<UserProfile, Error> {
        let created = self.client.register(email, secret, full_name).await?;

        if let Err(err) = self.login(email, secret).await {
            debug!("auto-login after registration failed: {err}");
        }

        Ok(created)
    }

    /// Startup transition: validate a persisted token if one exists.
    /// Returns `Ok(None)` when no token was persisted; a held token that
    /// fails validation ends logged out with storage cleared.
    /// # Errors
    /// Returns [`Error::SessionInvalid`] when the persisted token is
    /// rejected by the profile endpoint.
    pub async fn resume(&mut self) -> Result<Option<UserProfile>, Error> {
        if self.token.is_none() {
            return Ok(None);
        }

        self.fetch_profile().await.map(Some)
    }

    /// Clears the token, the cached profile, and the persisted copy.
    /// Idempotent; removal of an already-absent key is not an error, and a
    /// store failure here is logged and dropped since the in-memory session
    /// is already gone.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;

        if let Err(err) = self.store.remove() {
            debug!("failed to remove persisted token: {err}");
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}
