use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by entity constructors and mutators.
///
/// Every operation validates before touching any collection, so an `Err`
/// always means nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Input has the right shape but breaks a business rule (blank text, score out of range)
    #[error("validation error: {0}")]
    Validation(String),

    /// Input is not the kind of value the field holds (text score, unparseable date)
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// Referenced entity is not owned by the acting user
    #[error("not found: {0}")]
    NotFound(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ModelError::Validation(msg.into())
    }

    pub fn invalid_type(msg: impl Into<String>) -> Self {
        ModelError::InvalidType(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ModelError::NotFound(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation(_))
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, ModelError::InvalidType(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ModelError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::validation("Review can't be empty!");
        assert_eq!(err.to_string(), "validation error: Review can't be empty!");

        let err = ModelError::not_found("The review is not found!");
        assert_eq!(err.to_string(), "not found: The review is not found!");
    }

    #[test]
    fn test_error_predicates() {
        assert!(ModelError::validation("x").is_validation());
        assert!(ModelError::invalid_type("x").is_invalid_type());
        assert!(ModelError::not_found("x").is_not_found());
        assert!(!ModelError::not_found("x").is_validation());
    }
}
