//! Character constants for terminal rendering.

/// Plus-shaped stars, smallest first.
pub const STAR_CHARS: &[char] = &['·', '+', '✦', '✧'];

/// Dust diamonds, smallest first.
pub const DUST_CHARS: &[char] = &['.', '⋄', '◆'];

/// Square sparks, smallest first.
pub const SPARK_CHARS: &[char] = &['·', '•', '■'];

/// Streak segments: horizontal, vertical, falling diagonal, rising diagonal.
pub const STREAK_CHARS: [char; 4] = ['─', '│', '╲', '╱'];

/// Pick from a size-ordered glyph set; `size` is in cells.
pub fn sized_glyph(set: &[char], size: f32) -> char {
    let idx = if size < 0.35 {
        0
    } else if size < 0.7 {
        1
    } else if size < 1.2 {
        2
    } else {
        3
    };
    set[idx.min(set.len() - 1)]
}
