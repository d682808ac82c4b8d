use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub url: String,
    pub token_file: PathBuf,
    pub user_agent: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(url: String, token_file: PathBuf) -> Self {
        Self {
            url,
            token_file,
            user_agent: crate::APP_USER_AGENT.to_string(),
        }
    }
}
