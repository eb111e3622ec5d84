pub mod jitter;

pub use jitter::{JitterEffect, FUZZ_RANGE};
