use std::fmt;

/// A word was asked to render at a position outside its own span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidContext {
    pub problem: String,
    pub details: String,
    pub position: usize,
}

impl InvalidContext {
    pub(crate) fn new(details: String, position: usize) -> Self {
        InvalidContext {
            problem: "Invalid context for the word".to_string(),
            details,
            position,
        }
    }
}

impl fmt::Display for InvalidContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.problem, self.details)
    }
}

impl std::error::Error for InvalidContext {}
