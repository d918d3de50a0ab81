//! Light and dark palettes.

mod palette;
mod parsing;

pub use palette::Palette;
pub use parsing::parse_hex_color;
