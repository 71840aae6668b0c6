use crate::foundation::core::Rgba;
use crate::foundation::error::{AstraError, AstraResult};

/// Normalized RGB triple, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    pub(crate) fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

// Named colors accepted alongside hex forms. Kept deliberately small; callers
// wanting precise tones should pass hex.
const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("pink", [255, 192, 203]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("olive", [128, 128, 0]),
    ("maroon", [128, 0, 0]),
];

/// Parse a color string into a normalized RGB triple.
///
/// Accepts `#rgb`, `#rrggbb` (case-insensitive) and the named colors above.
/// Malformed input is an [`AstraError::Color`]; nothing is clamped or guessed.
pub fn parse_color(s: &str) -> AstraResult<Color> {
    let trimmed = s.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).map_err(|msg| AstraError::color(format!("\"{s}\": {msg}")));
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(&(_, [r, g, b])) = NAMED.iter().find(|(name, _)| *name == lower) {
        return Ok(from_rgb8(r, g, b));
    }

    Err(AstraError::color(format!(
        "\"{s}\": expected #rgb, #rrggbb, or a known color name"
    )))
}

fn parse_hex(hex: &str) -> Result<Color, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    fn hex_nibble(ch: &str) -> Result<u8, String> {
        let n = u8::from_str_radix(ch, 16).map_err(|_| format!("invalid hex digit \"{ch}\""))?;
        Ok(n * 17)
    }

    match hex.len() {
        3 => {
            let r = hex_nibble(&hex[0..1])?;
            let g = hex_nibble(&hex[1..2])?;
            let b = hex_nibble(&hex[2..3])?;
            Ok(from_rgb8(r, g, b))
        }
        6 => {
            let r = hex_byte(&hex[0..2])?;
            let g = hex_byte(&hex[2..4])?;
            let b = hex_byte(&hex[4..6])?;
            Ok(from_rgb8(r, g, b))
        }
        _ => Err("hex color must be #rgb or #rrggbb".to_owned()),
    }
}

fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = parse_color("#12cabf").unwrap();
        assert!((c.r - 18.0 / 255.0).abs() < 1e-9);
        assert!((c.g - 202.0 / 255.0).abs() < 1e-9);
        assert!((c.b - 191.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parses_three_digit_hex() {
        let c = parse_color("#f0a").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 170.0 / 255.0));
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(parse_color("white").unwrap(), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(parse_color("Teal").unwrap(), parse_color("teal").unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "notacolor", "#12", "#12345", "#zzzzzz", "#1234567"] {
            let err = parse_color(bad).unwrap_err();
            assert!(matches!(err, AstraError::Color(_)), "{bad}: {err}");
            assert!(err.to_string().contains("color parse error"));
        }
    }
}
