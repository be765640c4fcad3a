//! Built-in color palettes.
//!
//! Each palette is a fixed sequence; bars cycle through it in the order their
//! color key first appears in the document.

use plotters::style::RGBColor;

pub const PROFESSIONAL: &[RGBColor] = &[
    RGBColor(0, 33, 71),    // deep navy
    RGBColor(72, 145, 220), // steel blue
    RGBColor(111, 130, 154),
    RGBColor(170, 179, 171),
    RGBColor(212, 180, 131),
    RGBColor(137, 130, 122),
    RGBColor(68, 104, 125),
];

pub const TRADITIONAL: &[RGBColor] = &[
    RGBColor(0, 33, 71),
    RGBColor(128, 21, 55),
    RGBColor(21, 97, 109),
    RGBColor(124, 109, 81),
    RGBColor(190, 151, 91),
    RGBColor(67, 86, 100),
];

pub const CORPORATE: &[RGBColor] = &[
    RGBColor(31, 64, 104),
    RGBColor(90, 124, 160),
    RGBColor(150, 170, 190),
    RGBColor(201, 211, 221),
    RGBColor(96, 108, 56),
    RGBColor(168, 136, 84),
];

pub const CONTEMPORARY: &[RGBColor] = &[
    RGBColor(38, 70, 83),
    RGBColor(42, 157, 143),
    RGBColor(233, 196, 106),
    RGBColor(244, 162, 97),
    RGBColor(231, 111, 81),
    RGBColor(141, 153, 174),
];

pub const VIBRANT: &[RGBColor] = &[
    RGBColor(230, 57, 70),
    RGBColor(29, 53, 87),
    RGBColor(69, 123, 157),
    RGBColor(42, 183, 202),
    RGBColor(255, 183, 3),
    RGBColor(251, 133, 0),
    RGBColor(144, 190, 109),
];

pub const PRIMARY: &[RGBColor] = &[
    RGBColor(214, 40, 40),
    RGBColor(0, 92, 169),
    RGBColor(252, 191, 73),
    RGBColor(0, 129, 72),
    RGBColor(84, 13, 110),
];

pub const PASTEL: &[RGBColor] = &[
    RGBColor(163, 193, 218),
    RGBColor(199, 206, 234),
    RGBColor(255, 211, 182),
    RGBColor(181, 234, 215),
    RGBColor(255, 170, 165),
    RGBColor(226, 240, 203),
];

pub const HEALTH: &[RGBColor] = &[
    RGBColor(0, 123, 167),
    RGBColor(60, 174, 163),
    RGBColor(32, 99, 155),
    RGBColor(91, 192, 190),
    RGBColor(23, 63, 95),
    RGBColor(237, 85, 59),
];

pub const DIVERGING: &[RGBColor] = &[
    RGBColor(178, 24, 43),
    RGBColor(214, 96, 77),
    RGBColor(244, 165, 130),
    RGBColor(209, 229, 240),
    RGBColor(146, 197, 222),
    RGBColor(67, 147, 195),
    RGBColor(33, 102, 172),
];

pub const SEQUENTIAL_BLUE: &[RGBColor] = &[
    RGBColor(8, 48, 107),
    RGBColor(8, 81, 156),
    RGBColor(33, 113, 181),
    RGBColor(66, 146, 198),
    RGBColor(107, 174, 214),
    RGBColor(158, 202, 225),
    RGBColor(198, 219, 239),
];

pub const CELEBRATORY: &[RGBColor] = &[
    RGBColor(255, 190, 11),
    RGBColor(251, 86, 7),
    RGBColor(255, 0, 110),
    RGBColor(131, 56, 236),
    RGBColor(58, 134, 255),
];

pub const INNOVATIVE: &[RGBColor] = &[
    RGBColor(6, 214, 160),
    RGBColor(17, 138, 178),
    RGBColor(7, 59, 76),
    RGBColor(239, 71, 111),
    RGBColor(255, 209, 102),
];

/// All recognized palette names, matching the CLI's accepted set.
pub const NAMES: &[&str] = &[
    "professional",
    "traditional",
    "corporate",
    "contemporary",
    "vibrant",
    "primary",
    "pastel",
    "health",
    "diverging",
    "sequential_blue",
    "celebratory",
    "innovative",
];

/// Look up a palette by its document/CLI name.
pub fn by_name(name: &str) -> Option<&'static [RGBColor]> {
    match name {
        "professional" => Some(PROFESSIONAL),
        "traditional" => Some(TRADITIONAL),
        "corporate" => Some(CORPORATE),
        "contemporary" => Some(CONTEMPORARY),
        "vibrant" => Some(VIBRANT),
        "primary" => Some(PRIMARY),
        "pastel" => Some(PASTEL),
        "health" => Some(HEALTH),
        "diverging" => Some(DIVERGING),
        "sequential_blue" => Some(SEQUENTIAL_BLUE),
        "celebratory" => Some(CELEBRATORY),
        "innovative" => Some(INNOVATIVE),
        _ => None,
    }
}
