//! Font discovery for the pure-Rust text backend.
//!
//! plotters' `ab_glyph` backend knows no system fonts by itself; register the
//! first sans-serif face we can find so captions and axis labels render.

use std::sync::Once;

use plotters::style::{register_font, FontStyle};
use tracing::warn;

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTER: Once = Once::new();

/// Register a sans-serif font for text rendering, once per process.
pub fn ensure_registered() {
    REGISTER.call_once(|| {
        for candidate in CANDIDATES {
            if let Ok(bytes) = std::fs::read(candidate) {
                // The font backend wants 'static bytes; one leaked face per
                // process is the price of admission.
                let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                if register_font("sans-serif", FontStyle::Normal, bytes).is_ok() {
                    return;
                }
            }
        }
        warn!("no system sans-serif font found; chart text may fail to render");
    });
}
