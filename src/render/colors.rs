//! Color helpers for callers building color matrices.
//!
//! The compositor passes color strings through to the surface untouched;
//! these helpers sit on either side of it: callers picking fills and
//! readable font colors, and surfaces resolving the named colors the
//! default configuration uses.

/// Fill for cells that carry no value, typically the row-header column.
pub const EMPTY_CELL: &str = "#f2f2f2";

/// Named colors accepted by the default configuration ("red", "white", ...)
/// and their hex equivalents.
pub const NAMED_COLORS: [(&str, &str); 14] = [
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("red", "#FF0000"),
    ("green", "#008000"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("brown", "#A52A2A"),
    ("pink", "#FFC0CB"),
];

/// Look up a named color, case-insensitively.
pub fn named_color(name: &str) -> Option<&'static str> {
    let name = name.trim();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, hex)| hex)
}

/// Normalize a color string to "#RRGGBB" hex.
///
/// Accepts "#RRGGBB", bare "RRGGBB", and the names in [`NAMED_COLORS`].
/// Anything else is left to the drawing surface and yields `None` here.
pub fn parse_color(s: &str) -> Option<String> {
    let s = s.trim();
    if let Some(hex) = named_color(s) {
        return Some(hex.to_string());
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Some(format!("#{}", hex.to_ascii_uppercase()));
    }
    None
}

/// Pick a readable font color for a cell fill: white text on dark fills,
/// black text on light ones.
///
/// Returns `None` when the fill is not a color this module understands.
pub fn readable_font_color(fill: &str) -> Option<&'static str> {
    let rgb = Rgb::from_css(fill)?;
    Some(if rgb.is_light() { "black" } else { "white" })
}

/// RGB color backing the light-or-dark decision when picking font colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #).
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let byte = |range| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    /// Parse "#RRGGBB", bare hex, or a name from [`NAMED_COLORS`].
    pub fn from_css(s: &str) -> Option<Self> {
        match named_color(s) {
            Some(hex) => Self::from_hex(hex),
            None => Self::from_hex(s),
        }
    }

    /// Relative luminance (0.0 to 1.0), simplified to
    /// 0.299*R + 0.587*G + 0.114*B.
    pub fn luminance(self) -> f64 {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        (0.299 * r + 0.587 * g + 0.114 * b) / 255.0
    }

    /// Check if this is a light color (luminance > 0.5).
    pub fn is_light(self) -> bool {
        self.luminance() > 0.5
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#ff0000").unwrap(), "#FF0000");
        assert_eq!(parse_color("FF0000").unwrap(), "#FF0000");
        assert!(parse_color("#ff00").is_none());
        assert!(parse_color("#gggggg").is_none());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("red").unwrap(), "#FF0000");
        assert_eq!(parse_color("White").unwrap(), "#FFFFFF");
        assert_eq!(parse_color("BLACK").unwrap(), "#000000");
        assert!(parse_color("not-a-color").is_none());
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#FF8040").unwrap(), Rgb::new(255, 128, 64));
        assert_eq!(Rgb::from_hex("ff8040").unwrap(), Rgb::new(255, 128, 64));
        assert!(Rgb::from_hex("#12345").is_none());
    }

    #[test]
    fn test_readable_font_color() {
        // White text on dark fills, black on light ones.
        assert_eq!(readable_font_color("#1a9850"), Some("white"));
        assert_eq!(readable_font_color(EMPTY_CELL), Some("black"));
        assert_eq!(readable_font_color("red"), Some("white"));
        assert_eq!(readable_font_color("rgb(1, 2, 3)"), None);
    }

    #[test]
    fn test_luminance_ordering() {
        let dark = Rgb::from_css("black").unwrap();
        let light = Rgb::from_css("white").unwrap();
        assert!(dark.luminance() < light.luminance());
        assert!(!dark.is_light());
        assert!(light.is_light());
    }
}
