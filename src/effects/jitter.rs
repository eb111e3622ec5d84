// src/effects/jitter.rs
//
// Per-row horizontal jitter. Each frame every pixel row of the text is
// displaced by a random offset scaled by the active intensity; hovering
// swaps the base intensity for the hover intensity.

use rand::Rng;

/// Total jitter range in pixels; a row moves at most half of this in
/// either direction at full intensity.
pub const FUZZ_RANGE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterEffect {
    pub base_intensity: f32,
    pub hover_intensity: f32,
}

impl JitterEffect {
    pub fn new(base_intensity: f32, hover_intensity: f32) -> Self {
        Self {
            base_intensity,
            hover_intensity,
        }
    }

    /// Intensity for the current frame. Hover only counts while hover
    /// handling is enabled.
    pub fn active_intensity(&self, hovering: bool, hover_enabled: bool) -> f32 {
        if hovering && hover_enabled {
            self.hover_intensity
        } else {
            self.base_intensity
        }
    }

    /// Random horizontal displacement for one row:
    /// floor(intensity * (rand[0,1) - 0.5) * FUZZ_RANGE).
    pub fn row_offset<R: Rng>(intensity: f32, random: &mut R) -> i32 {
        (intensity * (random.gen::<f32>() - 0.5) * FUZZ_RANGE).floor() as i32
    }
}
