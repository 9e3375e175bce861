//! Fading trail of marks left behind by the pointer.

use std::collections::VecDeque;

use galaxy_core::Pointer;

/// Marks kept at most.
pub const TRAIL_LENGTH: usize = 8;

/// Minimum pointer travel, in pixels, before a new mark is left.
pub const SPACING: f32 = 12.0;

/// Life lost by every mark per frame.
pub const FADE: f32 = 0.08;

/// One mark of the trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorMark {
    pub x: f32,
    pub y: f32,
    /// Remaining life, 1.0 when fresh.
    pub life: f32,
}

/// Bounded trail following the pointer, oldest mark first.
#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    marks: VecDeque<CursorMark>,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self {
            marks: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Leave a mark at the pointer if it travelled far enough since the last one.
    pub fn follow(&mut self, pointer: Option<Pointer>) {
        let Some(p) = pointer else {
            return;
        };
        if let Some(last) = self.marks.back() {
            let distance = ((p.x - last.x).powi(2) + (p.y - last.y).powi(2)).sqrt();
            if distance < SPACING {
                return;
            }
        }
        self.marks.push_back(CursorMark {
            x: p.x,
            y: p.y,
            life: 1.0,
        });
        while self.marks.len() > TRAIL_LENGTH {
            self.marks.pop_front();
        }
    }

    /// Age every mark by one frame and forget the spent ones.
    pub fn fade(&mut self, k: f32) {
        for mark in &mut self.marks {
            mark.life -= FADE * k;
        }
        self.marks.retain(|m| m.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CursorMark> {
        self.marks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Option<Pointer> {
        Some(Pointer { nx: 0.0, ny: 0.0, x, y })
    }

    #[test]
    fn test_marks_need_spacing() {
        let mut trail = CursorTrail::new();
        trail.follow(at(0.0, 0.0));
        trail.follow(at(5.0, 5.0));
        assert_eq!(trail.len(), 1);
        trail.follow(at(12.0, 0.0));
        assert_eq!(trail.len(), 2);
        trail.follow(None);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut trail = CursorTrail::new();
        for i in 0..50 {
            trail.follow(at(i as f32 * 20.0, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        assert_eq!(trail.iter().next().map(|m| m.x), Some(42.0 * 20.0));
    }

    #[test]
    fn test_marks_fade_out() {
        let mut trail = CursorTrail::new();
        trail.follow(at(0.0, 0.0));
        for _ in 0..12 {
            trail.fade(1.0);
        }
        assert_eq!(trail.len(), 1);
        trail.fade(1.0);
        assert!(trail.is_empty());
    }
}
