use miette::Diagnostic;
use thiserror::Error;

/// An error carrying presentation hints alongside its diagnostic message.
///
/// `Display` only ever shows the diagnostic `message`. The `title` and
/// `user_message` are for code that shows the failure to an end user, see
/// [`ErrorNotice`](super::ErrorNotice).
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
pub struct TitledError {
    message: String,
    title: String,
    user_message: Option<String>,
}

impl TitledError {
    pub fn new(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
            user_message: None,
        }
    }

    pub fn with_user_message(
        message: impl Into<String>,
        title: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
            user_message: Some(user_message.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }
}
