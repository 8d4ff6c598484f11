/// Result alias that carries the custom [`FocusError`] type.
pub type Result<T> = std::result::Result<T, FocusError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    /// Free-form error raised by hosts embedding the controller, so they can
    /// surface a readable message without defining their own taxonomy.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Failure while decoding or encoding chart and configuration JSON.
    #[error("{0}")]
    Format(#[from] serde_json::Error),
}

impl FocusError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for FocusError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for FocusError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
