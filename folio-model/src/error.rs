use std::fmt::{self, Display};

/// Errors produced when parsing model values from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownCategory(String),
    UnknownExperienceKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownCategory(raw) => {
                write!(f, "unknown category: {raw}")
            }
            ModelError::UnknownExperienceKind(raw) => {
                write!(f, "unknown experience kind: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
