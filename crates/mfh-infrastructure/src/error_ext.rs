//! Error context helpers

use mfh_domain::error::{Error, Result};

/// Extension trait attaching context to foreign errors
pub trait ErrorContext<T> {
    /// Wrap the error as a configuration error with the given message
    fn context(self, message: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, message: &str) -> Result<T> {
        self.map_err(|e| Error::Configuration {
            message: message.to_string(),
            source: Some(Box::new(e)),
        })
    }
}
