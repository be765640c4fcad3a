//! Chart rendering and export over plotters.

pub mod export;
pub mod figure;
mod fonts;
pub mod html;
#[cfg(feature = "themes")]
pub mod palette;
pub mod theme;

pub use export::ExportFormat;
pub use figure::{GroupBy, TimelineFigure};
pub use theme::ThemeCapability;
