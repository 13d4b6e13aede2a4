//! Derives the shop's shade palette from the configured theme color and
//! emits it as CSS custom properties for the render layer.

/// Fallback when the configured color cannot be parsed.
pub const DEFAULT_THEME_COLOR: &str = "#2563EB";

/// Blend weight per shade: positive mixes toward white, negative toward
/// black. 600 is the base color itself.
const SHADE_WEIGHTS: [(u16, f64); 11] = [
    (50, 0.95),
    (100, 0.90),
    (200, 0.75),
    (300, 0.60),
    (400, 0.40),
    (500, 0.20),
    (600, 0.0),
    (700, -0.15),
    (800, -0.30),
    (900, -0.45),
    (950, -0.60),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// "R G B" triple, the form CSS custom properties carry.
    pub fn triple(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

/// Parse a `#RRGGBB` string. Anything else (wrong length, missing `#`,
/// bad hex digits) is a parse failure.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let s = input.trim().strip_prefix('#')?;
    if s.len() != 6 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

fn blend_channel(base: u8, target: u8, weight: f64) -> u8 {
    let mixed = base as f64 + (target as f64 - base as f64) * weight;
    mixed.round().clamp(0.0, 255.0) as u8
}

fn blend(base: Rgb, weight: f64) -> Rgb {
    // Positive weight mixes toward white, negative toward black.
    let (target, w) = if weight >= 0.0 {
        (Rgb { r: 255, g: 255, b: 255 }, weight)
    } else {
        (Rgb { r: 0, g: 0, b: 0 }, -weight)
    };
    Rgb {
        r: blend_channel(base.r, target.r, w),
        g: blend_channel(base.g, target.g, w),
        b: blend_channel(base.b, target.b, w),
    }
}

/// The 11-shade palette for a configured color. A malformed color degrades
/// silently to the default blue; no error surfaces to the caller.
pub fn palette(hex: &str) -> Vec<(u16, Rgb)> {
    let base = parse_hex(hex)
        .or_else(|| parse_hex(DEFAULT_THEME_COLOR))
        .unwrap_or(Rgb { r: 37, g: 99, b: 235 });
    SHADE_WEIGHTS
        .iter()
        .map(|&(shade, weight)| (shade, blend(base, weight)))
        .collect()
}

/// Build the `:root { --primary-<shade>: R G B; … }` block injected into
/// every rendered document.
pub fn css_variables(hex: &str) -> String {
    let mut css = String::from(":root {\n");
    for (shade, rgb) in palette(hex) {
        css.push_str(&format!("    --primary-{}: {};\n", shade, rgb.triple()));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hex() {
        assert_eq!(parse_hex("#2563EB"), Some(Rgb { r: 37, g: 99, b: 235 }));
        assert_eq!(parse_hex("#ffffff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(parse_hex(" #000000 "), Some(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("2563EB"), None);
        assert_eq!(parse_hex("#25 3EB"), None);
        assert_eq!(parse_hex("#25631"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex("#2563EBFF"), None);
    }

    #[test]
    fn palette_has_eleven_shades_in_range() {
        let p = palette("#A1B2C3");
        assert_eq!(p.len(), 11);
        let names: Vec<u16> = p.iter().map(|(s, _)| *s).collect();
        assert_eq!(names, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]);
        for (_, rgb) in &p {
            let triple = rgb.triple();
            let parts: Vec<&str> = triple.split(' ').collect();
            assert_eq!(parts.len(), 3);
            for part in parts {
                let v: i64 = part.parse().unwrap();
                assert!((0..=255).contains(&v));
            }
        }
    }

    #[test]
    fn base_shade_is_unchanged() {
        let p = palette("#2563EB");
        let base = p.iter().find(|(s, _)| *s == 600).unwrap().1;
        assert_eq!(base, Rgb { r: 37, g: 99, b: 235 });
    }

    #[test]
    fn darkest_shade_blends_sixty_percent_toward_black() {
        let p = palette("#2563EB");
        let darkest = p.iter().find(|(s, _)| *s == 950).unwrap().1;
        assert_eq!(darkest, Rgb { r: 15, g: 40, b: 94 });
    }

    #[test]
    fn invalid_input_falls_back_to_default_palette() {
        assert_eq!(palette("not-a-color"), palette(DEFAULT_THEME_COLOR));
        assert_eq!(palette(""), palette(DEFAULT_THEME_COLOR));
    }

    #[test]
    fn css_variables_carry_triples() {
        let css = css_variables("#2563EB");
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary-600: 37 99 235;"));
        assert!(css.contains("--primary-950: 15 40 94;"));
        assert_eq!(css.matches("--primary-").count(), 11);
    }
}
