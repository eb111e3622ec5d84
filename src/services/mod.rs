pub mod text_rasterizer;

pub use text_rasterizer::{CosmicRasterizer, FontSpec, TextRasterizer};
