//! Color utilities and palettes.

use galaxy_core::Rgb;

/// Deep space fill.
pub const SPACE: Rgb = Rgb::from_hex(0x000008);

/// Soft overlay tint added over the fill.
pub const SPACE_GLOW: Rgb = Rgb::new(10, 10, 25);

/// Sky blue used by falling stars and cursor dust.
pub const SKY_BLUE: Rgb = Rgb::from_hex(0x87ceeb);

/// Royal blue used by some of the drifting dust.
pub const ROYAL_BLUE: Rgb = Rgb::from_hex(0x4169e1);

/// Cursor trail tint.
pub const CURSOR_BLUE: Rgb = Rgb::new(56, 139, 253);

/// Cursor halo tint.
pub const CURSOR_VIOLET: Rgb = Rgb::new(124, 58, 237);

/// Star palette as (color, size, opacity), the first entry being the common one.
pub const STAR_TYPES: [(Rgb, f32, f32); 6] = [
    (Rgb::WHITE, 0.8, 0.9),
    (Rgb::WHITE, 1.2, 0.8),
    (Rgb::from_hex(0xffffcc), 1.0, 0.85),
    (Rgb::from_hex(0xccddff), 1.4, 0.7),
    (Rgb::from_hex(0xffddcc), 0.9, 0.6),
    (Rgb::WHITE, 2.0, 1.0),
];

/// Convert HSL (hue in degrees, saturation and lightness in 0.0-1.0) to RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgb::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(480.0, 1.0, 0.5), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_hsl_gray() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.5), Rgb::new(127, 127, 127));
    }
}
