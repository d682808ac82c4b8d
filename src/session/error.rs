use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("session invalid: token rejected by the profile endpoint")]
    SessionInvalid,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
