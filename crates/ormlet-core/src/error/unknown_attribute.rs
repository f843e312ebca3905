use super::Error;

/// Error when an attribute name is not one of the model's columns.
#[derive(Debug)]
pub(super) struct UnknownAttributeError {
    model: Box<str>,
    attribute: Box<str>,
}

impl std::error::Error for UnknownAttributeError {}

impl core::fmt::Display for UnknownAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown attribute `{}` for model `{}`",
            self.attribute, self.model
        )
    }
}

impl Error {
    /// Creates an unknown attribute error naming the model and the offending key.
    pub fn unknown_attribute(model: impl Into<String>, attribute: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAttribute(UnknownAttributeError {
            model: model.into().into(),
            attribute: attribute.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown attribute error.
    pub fn is_unknown_attribute(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownAttribute(_)))
    }
}
