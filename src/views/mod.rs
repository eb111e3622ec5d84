// src/views/mod.rs

pub mod fuzzy_text;
pub mod lifecycle;

pub use fuzzy_text::{FuzzyText, Viewport};
pub use lifecycle::{CancelToken, LifecycleHandle};
