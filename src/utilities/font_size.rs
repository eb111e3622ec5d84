// src/utilities/font_size.rs
//
// CSS-style font-size expressions from the config file.
// Supported: "64px", "4rem", "8vw", "clamp(2rem, 8vw, 8rem)".

const PX_PER_REM: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Rem(f32),
    Vw(f32),
}

impl Length {
    pub fn resolve(&self, viewport_width: f32) -> f32 {
        match self {
            Length::Px(v) => *v,
            Length::Rem(v) => v * PX_PER_REM,
            Length::Vw(v) => viewport_width * v / 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSizeSpec {
    Fixed(Length),
    Clamp {
        min: Length,
        preferred: Length,
        max: Length,
    },
}

impl FontSizeSpec {
    /// The responsive default: clamp(2rem, 8vw, 8rem)
    pub fn responsive_default() -> Self {
        FontSizeSpec::Clamp {
            min: Length::Rem(2.0),
            preferred: Length::Vw(8.0),
            max: Length::Rem(8.0),
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Some(clamped) = parse_clamp(trimmed) {
            return Some(clamped);
        }
        parse_length(trimmed).map(FontSizeSpec::Fixed)
    }

    /// Absolute pixel size for the given viewport width.
    pub fn resolve(&self, viewport_width: f32) -> f32 {
        match self {
            FontSizeSpec::Fixed(len) => len.resolve(viewport_width),
            FontSizeSpec::Clamp {
                min,
                preferred,
                max,
            } => {
                let lo = min.resolve(viewport_width);
                let hi = max.resolve(viewport_width);
                preferred.resolve(viewport_width).max(lo).min(hi)
            }
        }
    }
}

fn parse_length(input: &str) -> Option<Length> {
    let re = regex::Regex::new(r"^([\d.]+)\s*(px|rem|vw)$").ok()?;
    let caps = re.captures(input.trim())?;
    let value: f32 = caps[1].parse().ok()?;
    match &caps[2] {
        "px" => Some(Length::Px(value)),
        "rem" => Some(Length::Rem(value)),
        "vw" => Some(Length::Vw(value)),
        _ => None,
    }
}

fn parse_clamp(input: &str) -> Option<FontSizeSpec> {
    let re = regex::Regex::new(r"^clamp\(\s*([^,]+),\s*([^,]+),\s*([^,)]+)\)$").ok()?;
    let caps = re.captures(input)?;
    Some(FontSizeSpec::Clamp {
        min: parse_length(&caps[1])?,
        preferred: parse_length(&caps[2])?,
        max: parse_length(&caps[3])?,
    })
}
