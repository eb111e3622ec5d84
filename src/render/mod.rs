pub mod frame;
pub mod jitter_renderer;
pub mod raster;

pub use frame::{DisplayFrame, HORIZONTAL_MARGIN};
pub use jitter_renderer::render_jitter_frame;
pub use raster::{OffscreenRaster, EXTRA_WIDTH_BUFFER};
