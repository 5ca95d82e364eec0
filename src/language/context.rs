/// An absolute position within a sentence, handed to a token when it is asked
/// to render itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    position: usize,
}

impl Context {
    pub fn new(position: usize) -> Self {
        Context { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
