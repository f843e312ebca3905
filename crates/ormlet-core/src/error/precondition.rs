use super::Error;

/// Error when an operation is invoked on an instance in the wrong state,
/// e.g. inserting a record that already has a primary key.
#[derive(Debug)]
pub(super) struct PreconditionError {
    message: Box<str>,
}

impl std::error::Error for PreconditionError {}

impl core::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "precondition failed: {}", self.message)
    }
}

impl Error {
    /// Creates a precondition error.
    pub fn precondition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Precondition(PreconditionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a precondition error.
    pub fn is_precondition(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Precondition(_)))
    }
}
