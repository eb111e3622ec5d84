// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::config::config_types::{FontConfig, FuzzyTextConfig, OscConfig, ThemeConfig, WindowConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub text: FuzzyTextConfig,
    pub fonts: FontConfig,
    pub theme: ThemeConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    /// Font file paths, relative ones resolved against the executable's
    /// directory when possible.
    pub fn resolve_font_paths(&self) -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        self.fonts
            .paths
            .iter()
            .map(|raw| {
                let path = PathBuf::from(raw);
                if path.is_absolute() {
                    return path;
                }
                match &exe_dir {
                    Some(dir) => dir.join(&path),
                    None => path,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeMode;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [window]
            width = 1280
            height = 720

            [text]
            content = "404"
            font_size = "64px"
            enable_hover = false

            [fonts]
            paths = ["assets/SomeFont.ttf"]

            [theme]
            initial = "light"

            [osc]
            rx_port = 8000
            "#,
        )
        .unwrap();

        assert_eq!(config.text.content, "404");
        assert_eq!(config.text.font_size, "64px");
        assert!(!config.text.enable_hover);
        // untouched fields fall back to their defaults
        assert_eq!(config.text.font_weight, 900);
        assert_eq!(config.text.font_family, "inherit");
        assert_eq!(config.text.base_intensity, 0.18);
        assert_eq!(config.text.hover_intensity, 0.5);
        assert_eq!(config.theme.initial, ThemeMode::Light);
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let config: Config = toml::from_str(
            r#"
            [window]
            width = 800
            height = 600

            [text]
            content = "Hi"

            [fonts]

            [theme]

            [osc]
            rx_port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.text.font_size, "clamp(2rem, 8vw, 8rem)");
        assert!(config.text.enable_hover);
        assert!(config.fonts.paths.is_empty());
        assert!(config.fonts.default_family.is_none());
        assert_eq!(config.theme.initial, ThemeMode::Dark);
    }
}
