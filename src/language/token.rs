//! Tokens, the units a sentence is made of

use std::fmt;

use super::{Context, InvalidContext};

/// A renderable unit. Numbers carry only their value and so can be shared
/// between sentences; words carry the offset at which they were placed and
/// are therefore unique to that placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(u16),
    Word { text: String, start: usize },
}

impl Token {
    pub fn number(value: u16) -> Self {
        Token::Number(value)
    }

    pub fn word(text: impl Into<String>, start: usize) -> Self {
        Token::Word {
            text: text.into(),
            start,
        }
    }

    /// Number of positions this token occupies: the decimal digits of a
    /// number, or the characters of a word.
    pub fn length(&self) -> usize {
        match self {
            Token::Number(value) => value
                .to_string()
                .len(),
            Token::Word { text, .. } => text
                .chars()
                .count(),
        }
    }

    /// Describe this token as seen from the given position. A number renders
    /// anywhere; a word only within `[start, start + length)`.
    pub fn render(&self, context: &Context) -> Result<String, InvalidContext> {
        let position = context.position();
        match self {
            Token::Number(value) => Ok(format!(
                "This is the number {} at position {}",
                value, position
            )),
            Token::Word { start, .. } => {
                if position < *start || position >= start + self.length() {
                    return Err(InvalidContext::new(self.to_string(), position));
                }
                Ok(format!("This is the word {} at position {}", self, position))
            }
        }
    }
}

// Canonical form
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Word { text, start } => write!(f, "{}({})", text, start),
        }
    }
}
