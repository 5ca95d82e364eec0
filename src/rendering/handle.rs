use std::rc::Rc;

use crate::language::{Context, InvalidContext, Token};

use super::Identified;

/// One slot of a sentence. Cache-managed numbers are held through a reference
/// count shared with the cache and any other sentence; words, decorated or
/// not, are owned by the slot alone.
#[derive(Debug)]
pub enum Handle {
    Shared(Rc<Token>),
    Owned(Token),
    Identified(Box<Identified>),
}

impl Handle {
    pub fn length(&self) -> usize {
        match self {
            Handle::Shared(token) => token.length(),
            Handle::Owned(token) => token.length(),
            Handle::Identified(wrapped) => wrapped.length(),
        }
    }

    pub fn render(&self, context: &Context) -> Result<String, InvalidContext> {
        match self {
            Handle::Shared(token) => token.render(context),
            Handle::Owned(token) => token.render(context),
            Handle::Identified(wrapped) => wrapped.render(context),
        }
    }

    pub fn token(&self) -> &Token {
        match self {
            Handle::Shared(token) => token,
            Handle::Owned(token) => token,
            Handle::Identified(wrapped) => wrapped.token(),
        }
    }

    /// The decorator's identifier, if this handle carries one.
    pub fn identifier(&self) -> Option<u32> {
        match self {
            Handle::Identified(wrapped) => Some(wrapped.id()),
            _ => None,
        }
    }

    /// Whether both handles refer to one and the same shared instance. Equal
    /// values held separately are not the same.
    pub fn same(a: &Handle, b: &Handle) -> bool {
        match (a, b) {
            (Handle::Shared(one), Handle::Shared(two)) => Rc::ptr_eq(one, two),
            _ => false,
        }
    }
}
