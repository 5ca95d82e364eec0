//! Deduplication of number tokens behind shared handles

mod identifiers;

use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

use crate::language::Token;
use crate::rendering::{Handle, Identified};

pub use identifiers::Identifiers;

/// Decides which words get an identifier attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Words with more characters than this are wrapped.
    pub threshold: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Policy { threshold: 5 }
    }
}

impl Policy {
    pub fn wraps(&self, text: &str) -> bool {
        let length = text
            .chars()
            .count();
        length > self.threshold
    }
}

/// Hands out token handles. Each distinct number is constructed once and
/// shared by every handle requested for it; words are always constructed
/// fresh, since their start offset ties them to a single placement.
///
/// Handles hold their own reference, so they stay valid if the cache is
/// cleared or dropped.
#[derive(Debug)]
pub struct TokenCache {
    numbers: HashMap<u16, Rc<Token>>,
    policy: Policy,
    identifiers: Identifiers,
}

impl Default for TokenCache {
    fn default() -> Self {
        TokenCache::new(Policy::default(), Identifiers::random())
    }
}

impl TokenCache {
    pub fn new(policy: Policy, identifiers: Identifiers) -> Self {
        TokenCache {
            numbers: HashMap::new(),
            policy,
            identifiers,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn number(&mut self, value: u16) -> Handle {
        let token = self
            .numbers
            .entry(value)
            .or_insert_with(|| {
                debug!(value, "Constructing number token");
                Rc::new(Token::number(value))
            });
        Handle::Shared(Rc::clone(token))
    }

    pub fn word(&mut self, text: &str, start: usize) -> Handle {
        let token = Token::word(text, start);
        if self
            .policy
            .wraps(text)
        {
            let id = self
                .identifiers
                .next_id();
            debug!(text, start, id, "Wrapping word");
            Handle::Identified(Box::new(Identified::new(id, token)))
        } else {
            Handle::Owned(token)
        }
    }

    /// Number of distinct number tokens constructed so far.
    pub fn len(&self) -> usize {
        self.numbers
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers
            .is_empty()
    }

    /// Forget every cached number. Handles already given out are unaffected;
    /// later requests construct new instances.
    pub fn clear(&mut self) {
        debug!("Clearing {} cached numbers", self.numbers.len());
        self.numbers
            .clear();
    }
}
