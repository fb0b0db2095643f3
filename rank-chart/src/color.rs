use std::fmt::Write;

use palette::Srgb;

pub type Color = Srgb<u8>;

/// Number of colors series cycle through.
pub const PALETTE_SIZE: usize = 4;

/// Red, blue, magenta, black.
pub(crate) fn default_palette() -> [Color; PALETTE_SIZE] {
    [
        Srgb::new(255, 0, 0),
        Srgb::new(0, 0, 255),
        Srgb::new(255, 0, 255),
        Srgb::new(0, 0, 0),
    ]
}

/// Parse `#rrggbb` or `#rgb`.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    hex.trim().parse::<Color>().ok()
}

pub fn color_to_hex(color: Color) -> String {
    let (r, g, b) = color.into_components();
    let mut hex = String::with_capacity(7);
    let _ = write!(&mut hex, "#{r:02x}{g:02x}{b:02x}");
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(hex_to_color("#ff00ff"), Some(Srgb::new(255, 0, 255)));
        assert_eq!(hex_to_color(" #00f "), Some(Srgb::new(0, 0, 255)));
        assert_eq!(hex_to_color("not a color"), None);
        assert_eq!(color_to_hex(Srgb::new(255, 0, 255)), "#ff00ff");
        assert_eq!(color_to_hex(Srgb::new(0, 10, 0)), "#000a00");
    }

    #[test]
    fn test_default_palette_order() {
        let hex: Vec<String> = default_palette().into_iter().map(color_to_hex).collect();
        assert_eq!(hex, ["#ff0000", "#0000ff", "#ff00ff", "#000000"]);
    }
}
