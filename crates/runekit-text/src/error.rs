use thiserror::Error;

pub type Result<T> = std::result::Result<T, StringError>;

/// Precondition failures raised by the fallible string helpers.
///
/// `op` names the public function that rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringError {
    #[error("{op}: size must be greater than 0")]
    NonPositiveSize { op: &'static str },

    #[error("{op}: charset must not be empty")]
    EmptyCharset { op: &'static str },
}

impl StringError {
    /// Both variants are caller mistakes; nothing here is transient.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveSize { .. } | Self::EmptyCharset { .. }
        )
    }

    /// Name of the operation that produced the error.
    #[must_use]
    pub const fn op(&self) -> &'static str {
        match self {
            Self::NonPositiveSize { op } | Self::EmptyCharset { op } => op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operation() {
        let err = StringError::NonPositiveSize { op: "random_string" };
        assert_eq!(err.to_string(), "random_string: size must be greater than 0");

        let err = StringError::EmptyCharset { op: "random_string" };
        assert_eq!(err.to_string(), "random_string: charset must not be empty");
    }

    #[test]
    fn every_variant_is_invalid_argument() {
        assert!(StringError::NonPositiveSize { op: "chunk_string" }.is_invalid_argument());
        assert!(StringError::EmptyCharset { op: "random_string" }.is_invalid_argument());
        assert_eq!(
            StringError::NonPositiveSize { op: "chunk_string" }.op(),
            "chunk_string"
        );
    }
}
