use std::any::Any;

/// The default error type: an opaque, message-bearing failure.
///
/// This is what [`run`](crate::run) and [`run_async`](crate::run_async)
/// produce from a trapped panic, and what [`Outcome`](crate::Outcome)
/// falls back to when no error type is named. It deliberately has no
/// structure beyond its message; callers with richer needs substitute
/// their own `E`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable description this error carries.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reads a trapped panic payload.
    ///
    /// `panic!` hands its message over as a `String` (formatted) or a
    /// `&'static str` (literal); anything else is some custom
    /// `panic_any` payload we cannot render.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "opaque panic payload".to_string(),
            },
        };
        Self { message }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self { message }
    }
}
