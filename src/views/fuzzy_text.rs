// src/views/fuzzy_text.rs
//
// The FuzzyText instance: the main updating entity of the visualization.
//
// It holds everything one initialization owns (metrics, pixel buffers,
// lifecycle handle, hover flag) and provides the per-frame update method
// the app loop drives. Re-initialization triggers (viewport change, theme
// version change, config change) tear the previous lifecycle down before
// a new one starts.

use rand::Rng;

use crate::{
    config::FuzzyTextConfig,
    effects::JitterEffect,
    models::ThemeSignal,
    render::{render_jitter_frame, DisplayFrame, OffscreenRaster},
    services::{FontSpec, TextRasterizer},
    utilities::FontSizeSpec,
    views::lifecycle::{CancelToken, LifecycleHandle},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

enum Phase {
    /// Nothing will be drawn: empty ink, no usable text backend, or a
    /// cancelled initialization. Deliberate degrade-to-nothing.
    Dormant,
    /// Font loading has not signalled readiness yet. The token is checked
    /// the moment the wait resolves, before any buffer is touched.
    WaitingForFonts { token: CancelToken },
    Running {
        offscreen: OffscreenRaster,
        display: DisplayFrame,
    },
}

pub struct FuzzyText {
    config: FuzzyTextConfig,
    /// What "inherit" resolves to, from the embedding environment.
    inherited_family: Option<String>,
    viewport: Viewport,
    jitter: JitterEffect,
    phase: Phase,
    handle: LifecycleHandle,
    hovering: bool,
    theme_version_seen: u64,
}

impl FuzzyText {
    pub fn new(
        config: FuzzyTextConfig,
        viewport: Viewport,
        theme: &ThemeSignal,
        inherited_family: Option<String>,
    ) -> Self {
        let handle = LifecycleHandle::new();
        let token = handle.token();
        let jitter = JitterEffect::new(config.base_intensity, config.hover_intensity);
        Self {
            config,
            inherited_family,
            viewport,
            jitter,
            phase: Phase::WaitingForFonts { token },
            handle,
            hovering: false,
            theme_version_seen: theme.version(),
        }
    }

    /// One animation-loop iteration. Call once per host frame.
    pub fn update<R: Rng>(
        &mut self,
        rasterizer: &mut dyn TextRasterizer,
        theme: &ThemeSignal,
        random: &mut R,
    ) {
        if theme.version() != self.theme_version_seen {
            self.theme_version_seen = theme.version();
            self.reinit();
        }

        let waiting_token = match &self.phase {
            Phase::WaitingForFonts { token } => Some(token.clone()),
            _ => None,
        };
        if let Some(token) = waiting_token {
            if !rasterizer.fonts_ready() {
                // keep skipping frames until fonts resolve
                return;
            }
            // The wait has resolved; bail out before any buffer work if
            // this initialization was torn down meanwhile.
            if token.is_cancelled() {
                self.phase = Phase::Dormant;
                return;
            }
            self.measure_and_allocate(rasterizer);
        }

        if let Phase::Running { offscreen, display } = &mut self.phase {
            if !self.handle.is_active() {
                return;
            }
            let intensity = self
                .jitter
                .active_intensity(self.hovering, self.config.enable_hover);
            render_jitter_frame(
                offscreen,
                display,
                theme.mode().ink_color(),
                intensity,
                random,
            );
        }
    }

    /// Measurement phase: resolve font, rasterize the ink mask, size the
    /// buffers. Silently goes dormant when nothing can be drawn.
    fn measure_and_allocate(&mut self, rasterizer: &mut dyn TextRasterizer) {
        let font = self.resolved_font();
        let ink = match rasterizer.rasterize(&self.config.content, &font) {
            Some(ink) if !ink.is_empty() => ink,
            _ => {
                self.phase = Phase::Dormant;
                return;
            }
        };

        let offscreen = OffscreenRaster::new(ink);
        let display = DisplayFrame::new(offscreen.width, offscreen.height);
        self.phase = Phase::Running { offscreen, display };
    }

    /// Effective font for the current config and viewport.
    fn resolved_font(&self) -> FontSpec {
        let family = if self.config.font_family == "inherit" {
            self.inherited_family.clone()
        } else {
            Some(self.config.font_family.clone())
        };

        let size_spec = FontSizeSpec::parse(&self.config.font_size)
            .unwrap_or_else(FontSizeSpec::responsive_default);

        FontSpec {
            family,
            size: size_spec.resolve(self.viewport.width),
            weight: self.config.font_weight,
        }
    }

    pub fn pointer_enter(&mut self) {
        if self.config.enable_hover {
            self.hovering = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Viewport changes re-run measurement (responsive font sizes depend
    /// on the viewport width).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.reinit();
        }
    }

    /// Any config field change forces a full re-initialization.
    pub fn set_config(&mut self, config: FuzzyTextConfig) {
        if self.config != config {
            self.jitter = JitterEffect::new(config.base_intensity, config.hover_intensity);
            self.config = config;
            self.reinit();
        }
    }

    /// Cancels the running loop. Idempotent; safe before or after any
    /// other call.
    pub fn teardown(&mut self) {
        self.handle.teardown();
    }

    /// The latest rendered frame, if this instance is live and running.
    pub fn frame(&self) -> Option<&DisplayFrame> {
        if !self.handle.is_active() {
            return None;
        }
        match &self.phase {
            Phase::Running { display, .. } => Some(display),
            _ => None,
        }
    }

    pub fn active_intensity(&self) -> f32 {
        self.jitter
            .active_intensity(self.hovering, self.config.enable_hover)
    }

    pub fn lifecycle_token(&self) -> CancelToken {
        self.handle.token()
    }

    // Tears down the previous lifecycle strictly before the replacement
    // exists; two loops for the same instance are never live at once.
    fn reinit(&mut self) {
        self.handle.teardown();
        self.handle = LifecycleHandle::new();
        self.hovering = false;
        self.phase = Phase::WaitingForFonts {
            token: self.handle.token(),
        };
    }
}
