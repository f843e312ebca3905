use super::Error;

/// Error when table or column discovery fails.
///
/// Raised when the table backing a model does not exist, or when the
/// backing store reports no columns for it. Discovery results are only cached
/// on success, so a later call retries the introspection query.
#[derive(Debug)]
pub(super) struct SchemaError {
    message: Box<str>,
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema error: {}", self.message)
    }
}

impl Error {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema error.
    pub fn is_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Schema(_)))
    }
}
