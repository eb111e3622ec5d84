pub mod font_size;

pub use font_size::{FontSizeSpec, Length};
