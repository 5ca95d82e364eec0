pub mod cache;
pub mod language;
pub mod rendering;
pub mod sentence;
