use serde::Deserialize;

pub const DEFAULT_PALETTE: &str = "professional";
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 600;

/// The `config:` block as written in the document. Everything is optional;
/// a missing key simply leaves the next precedence tier in charge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentConfig {
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub add_branding: Option<bool>,
    #[serde(default)]
    pub show_dependencies: Option<bool>,
}

/// Entry-point overrides (CLI flags). `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub palette: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub add_branding: Option<bool>,
    pub show_dependencies: Option<bool>,
}

/// Fully resolved rendering preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub palette: String,
    pub width: u32,
    pub height: u32,
    pub add_branding: bool,
    pub show_dependencies: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            add_branding: false,
            show_dependencies: false,
        }
    }
}

impl ChartConfig {
    /// Resolve every field independently: entry-point override beats the
    /// document value, which beats the built-in default.
    pub fn resolve(document: &DocumentConfig, overrides: &ConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            palette: pick(overrides.palette.clone(), document.palette.clone(), defaults.palette),
            width: pick(overrides.width, document.width, defaults.width),
            height: pick(overrides.height, document.height, defaults.height),
            add_branding: pick(overrides.add_branding, document.add_branding, defaults.add_branding),
            show_dependencies: pick(
                overrides.show_dependencies,
                document.show_dependencies,
                defaults.show_dependencies,
            ),
        }
    }
}

/// First present value wins.
fn pick<T>(override_value: Option<T>, document_value: Option<T>, default: T) -> T {
    override_value.or(document_value).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_document_beats_default() {
        let document = DocumentConfig {
            palette: Some("corporate".into()),
            ..DocumentConfig::default()
        };

        let with_override = ConfigOverrides {
            palette: Some("vibrant".into()),
            ..ConfigOverrides::default()
        };
        assert_eq!(ChartConfig::resolve(&document, &with_override).palette, "vibrant");

        let no_override = ConfigOverrides::default();
        assert_eq!(ChartConfig::resolve(&document, &no_override).palette, "corporate");

        let neither = DocumentConfig::default();
        assert_eq!(ChartConfig::resolve(&neither, &no_override).palette, "professional");
    }

    #[test]
    fn fields_resolve_independently() {
        let document = DocumentConfig {
            width: Some(1600),
            add_branding: Some(true),
            ..DocumentConfig::default()
        };
        let overrides = ConfigOverrides {
            height: Some(900),
            add_branding: Some(false),
            ..ConfigOverrides::default()
        };
        let resolved = ChartConfig::resolve(&document, &overrides);
        assert_eq!(resolved.width, 1600);
        assert_eq!(resolved.height, 900);
        assert!(!resolved.add_branding);
        assert_eq!(resolved.palette, "professional");
        assert!(!resolved.show_dependencies);
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = ChartConfig::default();
        assert_eq!(config.palette, "professional");
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 600);
        assert!(!config.add_branding);
        assert!(!config.show_dependencies);
    }
}
