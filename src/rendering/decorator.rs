use crate::language::{Context, InvalidContext, Token};

/// Wraps a token with an identifier which is emitted ahead of the token's own
/// description. Length and span checks are those of the wrapped token.
#[derive(Debug)]
pub struct Identified {
    id: u32,
    token: Token,
}

impl Identified {
    pub fn new(id: u32, token: Token) -> Self {
        Identified { id, token }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn length(&self) -> usize {
        self.token
            .length()
    }

    pub fn render(&self, context: &Context) -> Result<String, InvalidContext> {
        let description = self
            .token
            .render(context)?;
        Ok(format!("{{{}}} {}", self.id, description))
    }
}
