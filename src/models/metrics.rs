// src/models/metrics.rs
//
// Tight ink bounding box of a rasterized string, relative to the
// text origin on the baseline.

/// Ink extents measured from the shaping origin. `left` is the distance the
/// ink reaches left of the origin (may be negative when the first glyph
/// starts right of it), `right` the distance it reaches rightwards.
/// `ascent`/`descent` are measured from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub left: f32,
    pub right: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl GlyphMetrics {
    /// Width of the tight box: ceil(left + right).
    pub fn bounding_width(&self) -> u32 {
        (self.left + self.right).max(0.0).ceil() as u32
    }

    /// Height of the tight box: ceil(ascent + descent).
    pub fn tight_height(&self) -> u32 {
        (self.ascent + self.descent).max(0.0).ceil() as u32
    }
}

/// Coverage mask of the rasterized string, sized exactly to the tight
/// bounding box. One byte of alpha per pixel, row-major.
#[derive(Debug, Clone)]
pub struct TextInk {
    pub metrics: GlyphMetrics,
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl TextInk {
    pub fn new(metrics: GlyphMetrics) -> Self {
        let width = metrics.bounding_width();
        let height = metrics.tight_height();
        Self {
            metrics,
            width,
            height,
            coverage: vec![0; (width * height) as usize],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Max-blend a single coverage value; glyph boxes may overlap.
    pub fn accumulate(&mut self, x: u32, y: u32, alpha: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        self.coverage[idx] = self.coverage[idx].max(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_sizes_round_up() {
        let metrics = GlyphMetrics {
            left: 1.2,
            right: 40.3,
            ascent: 22.6,
            descent: 5.1,
        };
        assert_eq!(metrics.bounding_width(), 42); // ceil(41.5)
        assert_eq!(metrics.tight_height(), 28); // ceil(27.7)
    }

    #[test]
    fn test_negative_extents_clamp_to_zero() {
        let metrics = GlyphMetrics {
            left: -2.0,
            right: 1.0,
            ascent: 0.0,
            descent: 0.0,
        };
        assert_eq!(metrics.bounding_width(), 0);
        assert_eq!(metrics.tight_height(), 0);
        assert!(TextInk::new(metrics).is_empty());
    }

    #[test]
    fn test_accumulate_is_max_blend() {
        let metrics = GlyphMetrics {
            left: 0.0,
            right: 2.0,
            ascent: 2.0,
            descent: 0.0,
        };
        let mut ink = TextInk::new(metrics);
        ink.accumulate(1, 1, 100);
        ink.accumulate(1, 1, 60);
        assert_eq!(ink.coverage[3], 100);
        // out of bounds is ignored
        ink.accumulate(5, 5, 255);
    }
}
