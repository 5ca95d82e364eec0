// Types representing the tokens a sentence is composed of

mod context;
mod error;
mod token;

// Re-export all public symbols
pub use context::*;
pub use error::*;
pub use token::*;
