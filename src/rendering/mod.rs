//! Handles through which a sentence holds and renders its tokens

mod decorator;
mod handle;

pub use decorator::Identified;
pub use handle::Handle;
