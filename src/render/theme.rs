//! Optional decorative theming.
//!
//! Theming is a build-time capability (the `themes` cargo feature). It is
//! resolved once at startup into a plain value the render layer carries
//! around, so nothing downstream consults global state to find out whether
//! palettes exist.

use plotters::style::RGBColor;

/// Watermark text drawn when branding is enabled.
pub const BRANDING_TEXT: &str = "gantt-charter";

/// Colors used when theming is unavailable or a palette name is unknown.
pub const FALLBACK_COLORS: &[RGBColor] = &[
    RGBColor(66, 133, 244),
    RGBColor(52, 168, 83),
    RGBColor(171, 71, 188),
    RGBColor(251, 140, 0),
    RGBColor(3, 169, 244),
    RGBColor(229, 57, 53),
    RGBColor(0, 188, 212),
    RGBColor(255, 193, 7),
];

/// Whether this build can supply named palettes and branding.
#[derive(Debug, Clone, Copy)]
pub struct ThemeCapability {
    pub available: bool,
}

impl ThemeCapability {
    /// Resolve theme availability for this build. Done once, at startup.
    pub fn detect() -> Self {
        Self {
            available: cfg!(feature = "themes"),
        }
    }

    /// Color sequence for a named palette, if theming can supply one.
    pub fn color_sequence(&self, name: &str) -> Option<&'static [RGBColor]> {
        if !self.available {
            return None;
        }
        lookup(name)
    }
}

#[cfg(feature = "themes")]
fn lookup(name: &str) -> Option<&'static [RGBColor]> {
    super::palette::by_name(name)
}

#[cfg(not(feature = "themes"))]
fn lookup(_name: &str) -> Option<&'static [RGBColor]> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "themes")]
    fn known_palettes_resolve_when_themes_are_available() {
        let theme = ThemeCapability::detect();
        assert!(theme.available);
        assert!(theme.color_sequence("professional").is_some());
        assert!(theme.color_sequence("does-not-exist").is_none());
    }

    #[test]
    fn unavailable_theming_yields_no_sequence() {
        let theme = ThemeCapability { available: false };
        assert!(theme.color_sequence("professional").is_none());
    }
}
