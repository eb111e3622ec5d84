// src/services/text_rasterizer.rs
//
// Text measurement and rasterization into a tight coverage mask.
// The cosmic-text implementation shapes the string once and composites the
// swash glyph bitmaps; everything downstream works on plain pixel rows.

use std::path::PathBuf;

use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent, Weight,
};

use crate::models::{GlyphMetrics, TextInk};

/// Resolved font parameters for one initialization.
/// `family: None` means "inherit" resolved to the environment default.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: Option<String>,
    pub size: f32,
    pub weight: u16,
}

/// Seam between the render path and the text stack. The renderer only ever
/// needs a readiness signal and a coverage mask; tests substitute a
/// deterministic implementation, and a missing backend degrades to no
/// rendering at all.
pub trait TextRasterizer {
    /// Whether fonts have been loaded and measuring would not fall back
    /// to a placeholder face.
    fn fonts_ready(&self) -> bool;

    /// Measure and rasterize `text`, returning the ink mask and metrics.
    /// `None` means nothing can be drawn (empty text, no usable font).
    fn rasterize(&mut self, text: &str, font: &FontSpec) -> Option<TextInk>;
}

pub struct CosmicRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    ready: bool,
}

impl CosmicRasterizer {
    /// Builds the font system from the system font database plus any
    /// font files named in the config.
    pub fn new(font_paths: &[PathBuf]) -> Self {
        let mut font_system = FontSystem::new();

        let db = font_system.db_mut();
        for path in font_paths {
            match std::fs::read(path) {
                Ok(bytes) => db.load_font_data(bytes),
                Err(e) => println!("Could not load font file {:?}: {}", path, e),
            }
        }

        Self {
            font_system,
            swash_cache: SwashCache::new(),
            ready: true,
        }
    }
}

struct GlyphBitmap {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl TextRasterizer for CosmicRasterizer {
    fn fonts_ready(&self) -> bool {
        self.ready
    }

    fn rasterize(&mut self, text: &str, font: &FontSpec) -> Option<TextInk> {
        if text.is_empty() {
            return None;
        }

        let mut attrs = Attrs::new().weight(Weight(font.weight));
        attrs = match &font.family {
            Some(name) => attrs.family(Family::Name(name)),
            None => attrs.family(Family::SansSerif),
        };

        let metrics = Metrics::new(font.size, font.size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        // Collect every glyph bitmap with its position so the tight box can
        // be taken over the whole string before compositing.
        let mut baseline: Option<i32> = None;
        let mut bitmaps: Vec<GlyphBitmap> = Vec::new();

        for run in buffer.layout_runs() {
            let line_y = run.line_y as i32;
            baseline.get_or_insert(line_y);

            for glyph in run.glyphs {
                let physical_glyph = glyph.physical((0.0, 0.0), 1.0);

                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                let width = image.placement.width;
                let height = image.placement.height;
                if width == 0 || height == 0 {
                    continue;
                }

                let alpha = match image.content {
                    SwashContent::Mask => image.data.clone(),
                    SwashContent::Color => {
                        // RGBA bitmap; only coverage matters here
                        image.data.chunks(4).map(|px| px[3]).collect()
                    }
                    SwashContent::SubpixelMask => image
                        .data
                        .chunks(3)
                        .map(|px| ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8)
                        .collect(),
                };

                bitmaps.push(GlyphBitmap {
                    x: physical_glyph.x + image.placement.left,
                    y: physical_glyph.y + line_y - image.placement.top,
                    width,
                    height,
                    alpha,
                });
            }
        }

        let baseline = baseline?;
        if bitmaps.is_empty() {
            return None;
        }

        let min_x = bitmaps.iter().map(|b| b.x).min()?;
        let max_x = bitmaps.iter().map(|b| b.x + b.width as i32).max()?;
        let min_y = bitmaps.iter().map(|b| b.y).min()?;
        let max_y = bitmaps.iter().map(|b| b.y + b.height as i32).max()?;

        let glyph_metrics = GlyphMetrics {
            left: -(min_x as f32),
            right: max_x as f32,
            ascent: (baseline - min_y) as f32,
            descent: (max_y - baseline) as f32,
        };

        let mut ink = TextInk::new(glyph_metrics);
        if ink.is_empty() {
            return None;
        }

        for bitmap in &bitmaps {
            for cy in 0..bitmap.height {
                for cx in 0..bitmap.width {
                    let alpha = bitmap.alpha[(cy * bitmap.width + cx) as usize];
                    if alpha == 0 {
                        continue;
                    }
                    let dst_x = (bitmap.x - min_x) as u32 + cx;
                    let dst_y = (bitmap.y - min_y) as u32 + cy;
                    ink.accumulate(dst_x, dst_y, alpha);
                }
            }
        }

        Some(ink)
    }
}
