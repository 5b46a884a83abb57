//! Named palettes and fonts, passed explicitly to renderers.

mod color;
mod table;

pub use color::Rgb;
pub use table::{FontSpec, ThemeTable, DEFAULT_THEME};
