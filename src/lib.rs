//! # Accedi (session client for the activities API)
//!
//! `accedi` owns the client side of the authentication session lifecycle:
//! it exchanges credentials for a bearer token, validates the token against
//! the profile endpoint, and persists the token across runs through an
//! injected key-value store.
//!
//! ## Session Model
//!
//! There are exactly two states: logged out (no token) and logged in (token
//! plus a profile fetched with it). A profile is never considered valid
//! unless backed by a currently-held token; the pair is updated together.
//!
//! ## Fail-Closed Validation
//!
//! Any failure to validate the held token — network error or a non-success
//! response from the profile endpoint — clears the in-memory session and
//! removes the persisted token. A token that cannot be validated is never
//! retained.

pub mod cli;
pub mod session;
pub mod store;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
