use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// An element at position `index` does not support lookup by `key`.
    pub fn missing_key(key: impl Into<String>, index: usize) -> Error {
        Error(
            ErrorKind::MissingKey {
                key: key.into(),
                index,
            }
            .into(),
        )
    }

    pub fn not_an_array(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotAnArray {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingKey { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("element #{index} has no key '{key}'")]
    MissingKey { key: String, index: usize },

    #[error("{operation} expects a JSON array")]
    NotAnArray { operation: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
