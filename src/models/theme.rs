// src/models/theme.rs
//
// Light/dark mode and the fixed two-color ink palette. The embedder owns
// a ThemeSignal and threads it into the renderer; the mode is read live
// every redraw, while a version bump signals a full re-initialization.

use serde::Deserialize;
use std::cell::Cell;

/// Ink color used in dark mode (#FA0001).
pub const DARK_INK: [u8; 4] = [0xFA, 0x00, 0x01, 0xFF];
/// Ink color used in light mode (#0DA5F0).
pub const LIGHT_INK: [u8; 4] = [0x0D, 0xA5, 0xF0, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn ink_color(&self) -> [u8; 4] {
        match self {
            ThemeMode::Dark => DARK_INK,
            ThemeMode::Light => LIGHT_INK,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Shared mode flag with a change counter. Single-threaded, like the rest
/// of the render path; the app writes, instances read.
#[derive(Debug)]
pub struct ThemeSignal {
    mode: Cell<ThemeMode>,
    version: Cell<u64>,
}

impl ThemeSignal {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Cell::new(initial),
            version: Cell::new(0),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn set(&self, mode: ThemeMode) {
        if self.mode.get() != mode {
            self.mode.set(mode);
            self.version.set(self.version.get() + 1);
        }
    }

    pub fn toggle(&self) {
        self.set(self.mode.get().toggled());
    }
}
