use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Every configured provider failed for one search.
    #[error("all {attempted} location providers failed: {message}")]
    AllProvidersFailed { attempted: usize, message: String },

    #[error("no location providers configured")]
    NoProviders,

    #[error("invalid notification: {0}")]
    InvalidNotification(String),
}
