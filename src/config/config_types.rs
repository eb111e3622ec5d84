// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::models::ThemeMode;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

/// Per-initialization inputs of the jitter text renderer. Changing any
/// field forces a full re-initialization of the instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FuzzyTextConfig {
    pub content: String,
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_enable_hover")]
    pub enable_hover: bool,
    #[serde(default = "default_base_intensity")]
    pub base_intensity: f32,
    #[serde(default = "default_hover_intensity")]
    pub hover_intensity: f32,
}

impl FuzzyTextConfig {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            font_family: default_font_family(),
            enable_hover: default_enable_hover(),
            base_intensity: default_base_intensity(),
            hover_intensity: default_hover_intensity(),
        }
    }
}

fn default_font_size() -> String {
    "clamp(2rem, 8vw, 8rem)".to_string()
}

fn default_font_weight() -> u16 {
    900
}

fn default_font_family() -> String {
    "inherit".to_string()
}

fn default_enable_hover() -> bool {
    true
}

fn default_base_intensity() -> f32 {
    0.18
}

fn default_hover_intensity() -> f32 {
    0.5
}

#[derive(Debug, Deserialize)]
pub struct FontConfig {
    /// Extra font files loaded into the font database at startup.
    #[serde(default)]
    pub paths: Vec<String>,
    /// What "inherit" resolves to; the rasterizer's sans-serif default
    /// when unset.
    #[serde(default)]
    pub default_family: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme")]
    pub initial: ThemeMode,
}

fn default_theme() -> ThemeMode {
    ThemeMode::Dark
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}
