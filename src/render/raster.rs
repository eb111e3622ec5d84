// src/render/raster.rs
//
// The offscreen raster: the text drawn once per redraw at its tight size
// plus a small horizontal pad, so the jitter pass can copy whole rows out
// of it without ever sampling glyph edges.

use crate::models::TextInk;

/// Fixed horizontal padding added around the tight glyph box (px).
pub const EXTRA_WIDTH_BUFFER: u32 = 10;

/// RGBA8 pixel buffer holding the tinted text. The shaped coverage mask is
/// kept so `redraw` can re-tint with the live theme color each frame
/// without re-shaping the string.
pub struct OffscreenRaster {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
    ink: TextInk,
}

impl OffscreenRaster {
    pub fn new(ink: TextInk) -> Self {
        let width = ink.width + EXTRA_WIDTH_BUFFER;
        let height = ink.height;
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            ink,
        }
    }

    /// Clears the buffer and draws the text in `color`, ink flush against
    /// the padding. Idempotent; touches nothing but its own pixels.
    pub fn redraw(&mut self, color: [u8; 4]) {
        self.pixels.fill(0);

        let x_offset = EXTRA_WIDTH_BUFFER / 2;
        for y in 0..self.ink.height {
            for x in 0..self.ink.width {
                let coverage = self.ink.coverage[(y * self.ink.width + x) as usize];
                if coverage == 0 {
                    continue;
                }
                let idx = ((y * self.width + x + x_offset) * 4) as usize;
                self.pixels[idx] = color[0];
                self.pixels[idx + 1] = color[1];
                self.pixels[idx + 2] = color[2];
                self.pixels[idx + 3] = (coverage as u16 * color[3] as u16 / 255) as u8;
            }
        }
    }

    /// One full pixel row, RGBA.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.width * 4) as usize;
        &self.pixels[start..start + (self.width * 4) as usize]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlyphMetrics, TextInk};

    fn solid_ink(width: u32, height: u32) -> TextInk {
        let metrics = GlyphMetrics {
            left: 0.0,
            right: width as f32,
            ascent: height as f32,
            descent: 0.0,
        };
        let mut ink = TextInk::new(metrics);
        ink.coverage.fill(255);
        ink
    }

    #[test]
    fn test_raster_width_adds_fixed_pad() {
        let raster = OffscreenRaster::new(solid_ink(40, 20));
        assert_eq!(raster.width, 50);
        assert_eq!(raster.height, 20);
    }

    #[test]
    fn test_redraw_places_ink_flush_against_pad() {
        let mut raster = OffscreenRaster::new(solid_ink(4, 2));
        raster.redraw([0xFA, 0x00, 0x01, 0xFF]);

        let row = raster.row(0);
        // 5 transparent pad pixels, then ink
        assert_eq!(&row[4 * 4..5 * 4], &[0, 0, 0, 0][..]);
        assert_eq!(&row[5 * 4..6 * 4], &[0xFA, 0x00, 0x01, 0xFF][..]);
        assert_eq!(&row[8 * 4..9 * 4], &[0xFA, 0x00, 0x01, 0xFF][..]);
        assert_eq!(&row[9 * 4..10 * 4], &[0, 0, 0, 0][..]);
    }

    #[test]
    fn test_redraw_picks_up_new_color() {
        let mut raster = OffscreenRaster::new(solid_ink(4, 2));
        raster.redraw([0xFA, 0x00, 0x01, 0xFF]);
        raster.redraw([0x0D, 0xA5, 0xF0, 0xFF]);
        assert_eq!(&raster.row(1)[5 * 4..6 * 4], &[0x0D, 0xA5, 0xF0, 0xFF][..]);
    }
}
