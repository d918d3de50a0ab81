use ratatui::style::Color;

/// What: Parse a hex color such as `#FF9933` (or `FF9933`, `#F93`) into a [`Color`].
///
/// Output:
/// - `Some(Color::Rgb)` on success; `None` for anything else.
#[must_use]
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let t = s.trim();
    let h = t.strip_prefix('#').unwrap_or(t);
    if !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match h.len() {
        6 => {
            let r = u8::from_str_radix(&h[0..2], 16).ok()?;
            let g = u8::from_str_radix(&h[2..4], 16).ok()?;
            let b = u8::from_str_radix(&h[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            // #RGB expands each nibble: F -> FF
            let nib = |i: usize| u8::from_str_radix(&h[i..=i], 16).ok().map(|v| v * 17);
            Some(Color::Rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        _ => None,
    }
}
