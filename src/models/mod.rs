pub mod metrics;
pub mod theme;

pub use metrics::{GlyphMetrics, TextInk};
pub use theme::{ThemeMode, ThemeSignal};
