// src/render/jitter_renderer.rs
//
// One animation-loop iteration: re-tint the offscreen raster with the live
// color, erase the previous frame, then copy every row out with a fresh
// random displacement.

use rand::Rng;

use crate::effects::jitter::{JitterEffect, FUZZ_RANGE};
use crate::render::frame::DisplayFrame;
use crate::render::raster::OffscreenRaster;

pub fn render_jitter_frame<R: Rng>(
    offscreen: &mut OffscreenRaster,
    display: &mut DisplayFrame,
    color: [u8; 4],
    intensity: f32,
    random: &mut R,
) {
    offscreen.redraw(color);
    display.clear_jitter_region(offscreen.width, FUZZ_RANGE as u32);

    for y in 0..display.height {
        let dx = JitterEffect::row_offset(intensity, random);
        display.blit_row(offscreen, y, dx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlyphMetrics, TextInk};
    use crate::render::frame::HORIZONTAL_MARGIN;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solid_raster(width: u32, height: u32) -> OffscreenRaster {
        let metrics = GlyphMetrics {
            left: 0.0,
            right: width as f32,
            ascent: height as f32,
            descent: 0.0,
        };
        let mut ink = TextInk::new(metrics);
        ink.coverage.fill(255);
        OffscreenRaster::new(ink)
    }

    #[test]
    fn test_zero_intensity_matches_static_raster() {
        let mut offscreen = solid_raster(8, 4);
        let mut display = DisplayFrame::new(offscreen.width, offscreen.height);
        let mut random = StdRng::seed_from_u64(99);

        render_jitter_frame(
            &mut offscreen,
            &mut display,
            [0xFA, 0x00, 0x01, 0xFF],
            0.0,
            &mut random,
        );

        // Pixel-identical to the offscreen raster, shifted by the margin.
        let margin = (HORIZONTAL_MARGIN * 4) as usize;
        for y in 0..display.height {
            let dst = display.row(y);
            let src = offscreen.row(y);
            assert_eq!(&dst[margin..margin + src.len()], src);
        }
    }

    #[test]
    fn test_frame_uses_current_color() {
        let mut offscreen = solid_raster(8, 4);
        let mut display = DisplayFrame::new(offscreen.width, offscreen.height);
        let mut random = StdRng::seed_from_u64(0);

        render_jitter_frame(&mut offscreen, &mut display, [1, 2, 3, 255], 0.0, &mut random);
        render_jitter_frame(&mut offscreen, &mut display, [9, 8, 7, 255], 0.0, &mut random);

        let margin = (HORIZONTAL_MARGIN as usize + 5) * 4;
        assert_eq!(&display.row(0)[margin..margin + 4], &[9, 8, 7, 255][..]);
    }

    #[test]
    fn test_all_ink_stays_within_jitter_bounds() {
        let mut offscreen = solid_raster(8, 6);
        let mut display = DisplayFrame::new(offscreen.width, offscreen.height);
        let mut random = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            render_jitter_frame(
                &mut offscreen,
                &mut display,
                [255, 255, 255, 255],
                1.0,
                &mut random,
            );
            // At full intensity rows move at most 15px; nothing may appear
            // outside margin ± FUZZ_RANGE/2 around the raster span.
            let lo = (HORIZONTAL_MARGIN - 15) as usize * 4;
            let hi = ((HORIZONTAL_MARGIN + offscreen.width + 15) * 4) as usize;
            for y in 0..display.height {
                let row = display.row(y);
                assert!(row[..lo].iter().all(|&px| px == 0));
                assert!(row[hi..].iter().all(|&px| px == 0));
            }
        }
    }
}
