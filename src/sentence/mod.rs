//! Sentences: ordered token handles resolved by absolute position

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::cache::TokenCache;
use crate::language::{Context, InvalidContext};
use crate::rendering::Handle;

/// An append-only sequence of token handles together with the total number of
/// positions they cover.
#[derive(Debug, Default)]
pub struct Sentence {
    tokens: Vec<Handle>,
    length: usize,
}

/// The rendering of one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub position: usize,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.position, self.text)
    }
}

impl Sentence {
    pub fn new() -> Self {
        Sentence::default()
    }

    pub fn append(&mut self, handle: Handle) -> &mut Self {
        self.length += handle.length();
        debug!(length = self.length, "Appended {}", handle.token());
        self.tokens
            .push(handle);
        self
    }

    /// Append a word starting at the current end of the sentence.
    pub fn add_word(&mut self, cache: &mut TokenCache, word: &str) -> &mut Self {
        let handle = cache.word(word, self.length);
        self.append(handle)
    }

    pub fn add_number(&mut self, cache: &mut TokenCache, number: u16) -> &mut Self {
        let handle = cache.number(number);
        self.append(handle)
    }

    /// Total number of positions, the sum of every token's length.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn tokens(&self) -> &[Handle] {
        &self.tokens
    }

    /// Find the token owning an absolute position, answering its index and
    /// the offset of the position within it.
    pub fn resolve(&self, position: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (index, handle) in self
            .tokens
            .iter()
            .enumerate()
        {
            let end = start + handle.length();
            if position < end {
                return Some((index, position - start));
            }
            start = end;
        }
        None
    }

    /// Render every position in order. Iteration stops after the first
    /// failure.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            sentence: self,
            position: 0,
            index: 0,
            offset: 0,
            failed: false,
        }
    }

    /// Render every position into the buffer, one line each. On failure the
    /// lines already written are left in place.
    pub fn render(&self, buffer: &mut String) -> Result<(), InvalidContext> {
        debug!(length = self.length, "Rendering {} tokens", self.tokens.len());
        for line in self.lines() {
            let line = line?;
            buffer.push_str(&line.to_string());
            buffer.push('\n');
        }
        Ok(())
    }
}

/// Walks the positions of a sentence, keeping a cursor of which token the
/// current position falls in and how far into it.
pub struct Lines<'s> {
    sentence: &'s Sentence,
    position: usize,
    index: usize,
    offset: usize,
    failed: bool,
}

impl Iterator for Lines<'_> {
    type Item = Result<Line, InvalidContext>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.sentence.length {
            return None;
        }

        let tokens = &self
            .sentence
            .tokens;

        // step over exhausted and zero-length tokens
        while self.offset
            >= tokens
                .get(self.index)?
                .length()
        {
            self.index += 1;
            self.offset = 0;
        }

        let context = Context::new(self.position);
        let result = tokens[self.index].render(&context);

        let position = self.position;
        self.position += 1;
        self.offset += 1;

        match result {
            Ok(text) => Some(Ok(Line { position, text })),
            Err(error) => {
                debug!(position, "Rendering aborted: {}", error);
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}
