// src/render/frame.rs
//
// The on-screen frame buffer. Wider than the offscreen raster by a margin
// on each side so displaced rows never clip.

use crate::render::raster::OffscreenRaster;

/// Horizontal margin on each side of the offscreen raster (px).
pub const HORIZONTAL_MARGIN: u32 = 50;

pub struct DisplayFrame {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl DisplayFrame {
    pub fn new(offscreen_width: u32, height: u32) -> Self {
        let width = offscreen_width + HORIZONTAL_MARGIN * 2;
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Erases the previous frame: the glyph bounds padded by `range` on
    /// both sides, over every row.
    pub fn clear_jitter_region(&mut self, offscreen_width: u32, range: u32) {
        let x_start = HORIZONTAL_MARGIN.saturating_sub(range);
        let x_end = (HORIZONTAL_MARGIN + offscreen_width + range).min(self.width);
        if x_start >= x_end {
            return;
        }
        for y in 0..self.height {
            let row_base = (y * self.width * 4) as usize;
            let start = row_base + (x_start * 4) as usize;
            let end = row_base + (x_end * 4) as usize;
            self.pixels[start..end].fill(0);
        }
    }

    /// Copies one source row into row `y`, displaced horizontally by `dx`
    /// from the margin position. Clipped to the frame bounds.
    pub fn blit_row(&mut self, src: &OffscreenRaster, y: u32, dx: i32) {
        if y >= self.height || y >= src.height {
            return;
        }
        let src_row = src.row(y);
        let dest_x = HORIZONTAL_MARGIN as i32 + dx;

        for x in 0..src.width as i32 {
            let fx = dest_x + x;
            if fx < 0 || fx >= self.width as i32 {
                continue;
            }
            let src_idx = (x * 4) as usize;
            let dst_idx = ((y * self.width) as i32 + fx) as usize * 4;
            self.pixels[dst_idx..dst_idx + 4].copy_from_slice(&src_row[src_idx..src_idx + 4]);
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.width * 4) as usize;
        &self.pixels[start..start + (self.width * 4) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlyphMetrics, TextInk};

    fn raster(width: u32, height: u32) -> OffscreenRaster {
        let metrics = GlyphMetrics {
            left: 0.0,
            right: width as f32,
            ascent: height as f32,
            descent: 0.0,
        };
        let mut ink = TextInk::new(metrics);
        ink.coverage.fill(255);
        let mut raster = OffscreenRaster::new(ink);
        raster.redraw([255, 255, 255, 255]);
        raster
    }

    #[test]
    fn test_frame_width_adds_margins() {
        let frame = DisplayFrame::new(50, 20);
        assert_eq!(frame.width, 150);
        assert_eq!(frame.height, 20);
    }

    #[test]
    fn test_blit_row_lands_at_margin_plus_dx() {
        let src = raster(4, 2);
        let mut frame = DisplayFrame::new(src.width, src.height);

        frame.blit_row(&src, 0, 3);
        let row = frame.row(0);
        // source x=5 is the first ink pixel; it lands at 50 + 3 + 5
        let ink_x = (HORIZONTAL_MARGIN as usize + 3 + 5) * 4;
        assert_eq!(&row[ink_x..ink_x + 4], &[255, 255, 255, 255][..]);
        // pixel just left of the displaced ink is still transparent
        assert_eq!(row[ink_x - 1], 0);
    }

    #[test]
    fn test_clear_erases_displaced_rows() {
        let src = raster(4, 2);
        let mut frame = DisplayFrame::new(src.width, src.height);

        frame.blit_row(&src, 0, -15);
        frame.clear_jitter_region(src.width, 30);
        assert!(frame.pixels().iter().all(|&px| px == 0));
    }

    #[test]
    fn test_blit_clips_at_frame_edges() {
        let src = raster(4, 2);
        let mut frame = DisplayFrame::new(src.width, src.height);
        // Way out of range; must not panic, must stay inside the buffer.
        frame.blit_row(&src, 1, -(HORIZONTAL_MARGIN as i32) - 100);
        frame.blit_row(&src, 1, frame.width as i32);
    }
}
