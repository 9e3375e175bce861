//! Terminal rendering of the particle field.
//!
//! Each terminal cell covers a block of virtual pixels. Glows and curtains
//! tint the cell background, sprites and streaks place a glyph whose color is
//! blended over that background by alpha. The brightest glyph in a cell wins.

use galaxy_core::{Rgb, Viewport};
use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::{DUST_CHARS, SPARK_CHARS, STAR_CHARS, STREAK_CHARS, sized_glyph};
use crate::surface::{Shape, Surface};

/// Glyphs fainter than this are not drawn.
const MIN_INK: f32 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    bg: Rgb,
    fg: Rgb,
    glyph: char,
    /// Brightness of the glyph currently in the cell.
    ink: f32,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Self {
            bg,
            fg: bg,
            glyph: ' ',
            ink: 0.0,
        }
    }
}

/// A grid of terminal cells acting as a drawing surface.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    /// Virtual pixels per cell, horizontally.
    cell_width: f32,
    /// Virtual pixels per cell, vertically.
    cell_height: f32,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    /// Terminal cells are roughly twice as tall as they are wide.
    pub const DEFAULT_CELL: (f32, f32) = (8.0, 16.0);

    pub fn new(cols: u16, rows: u16) -> Self {
        Self::with_cell_size(cols, rows, Self::DEFAULT_CELL.0, Self::DEFAULT_CELL.1)
    }

    pub fn with_cell_size(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
            cells: vec![Cell::blank(Rgb::BLACK); cols as usize * rows as usize],
        }
    }

    /// Resize the grid, discarding its contents.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) != (self.cols, self.rows) {
            self.cols = cols;
            self.rows = rows;
            self.cells = vec![Cell::blank(Rgb::BLACK); cols as usize * rows as usize];
        }
    }

    /// The surface in virtual pixels, or `None` when it has no cells.
    pub fn viewport(&self) -> Option<Viewport> {
        Viewport::new(
            self.cols as f32 * self.cell_width,
            self.rows as f32 * self.cell_height,
        )
    }

    /// Convert a terminal cell position to the virtual pixel at its center.
    pub fn cell_to_pixel(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.cell_width,
            (row as f32 + 0.5) * self.cell_height,
        )
    }

    /// Build one styled line per row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|c| {
                        let style = Style::new().fg(c.fg.into()).bg(c.bg.into());
                        Span::styled(c.glyph.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Render the grid over the whole frame.
    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Paragraph::new(self.lines()), frame.area());
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        let inside = col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32;
        inside.then(|| row as usize * self.cols as usize + col as usize)
    }

    fn locate(&self, x: f32, y: f32) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let col = (x / self.cell_width).floor() as i32;
        let row = (y / self.cell_height).floor() as i32;
        self.index(col, row)
    }

    fn tint(&mut self, col: i32, row: i32, color: Rgb, weight: f32) {
        let Some(i) = self.index(col, row) else {
            return;
        };
        let cell = &mut self.cells[i];
        cell.bg = cell.bg.mix(color, weight.clamp(0.0, 1.0));
        if cell.ink == 0.0 {
            cell.fg = cell.bg;
        }
    }

    fn ink(&mut self, x: f32, y: f32, glyph: char, color: Rgb, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha < MIN_INK {
            return;
        }
        let Some(i) = self.locate(x, y) else {
            return;
        };
        let cell = &mut self.cells[i];
        if alpha >= cell.ink {
            cell.glyph = glyph;
            cell.fg = cell.bg.mix(color, alpha);
            cell.ink = alpha;
        }
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Cell::blank(color));
    }

    fn glow(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        if radius <= 0.0 || alpha <= 0.0 || !radius.is_finite() {
            return;
        }
        let col0 = ((x - radius) / self.cell_width).floor().max(0.0) as i32;
        let col1 = ((x + radius) / self.cell_width).ceil().min(self.cols as f32) as i32;
        let row0 = ((y - radius) / self.cell_height).floor().max(0.0) as i32;
        let row1 = ((y + radius) / self.cell_height).ceil().min(self.rows as f32) as i32;

        for row in row0..row1 {
            for col in col0..col1 {
                let (cx, cy) = self.cell_to_pixel(col as u16, row as u16);
                let d = ((cx - x).powi(2) + (cy - y).powi(2)).sqrt();
                if d >= radius {
                    continue;
                }
                let falloff = 1.0 - d / radius;
                self.tint(col, row, color, alpha * falloff * falloff);
            }
        }
    }

    fn curtain(&mut self, x: f32, top: f32, bottom: f32, color: Rgb, alpha: f32) {
        let finite = x.is_finite() && top.is_finite() && bottom.is_finite();
        if alpha <= 0.0 || !finite || bottom <= top {
            return;
        }
        let col = (x / self.cell_width).floor() as i32;
        let row0 = (top / self.cell_height).floor().max(0.0) as i32;
        let row1 = (bottom / self.cell_height).ceil().min(self.rows as f32) as i32;

        for row in row0..row1 {
            let cy = (row as f32 + 0.5) * self.cell_height;
            let s = (cy - top) / (bottom - top);
            if (0.0..=1.0).contains(&s) {
                self.tint(col, row, color, alpha * curtain_profile(s));
            }
        }
    }

    fn sprite(&mut self, x: f32, y: f32, size: f32, shape: Shape, color: Rgb, alpha: f32) {
        let cells = size / self.cell_width;
        let glyph = match shape {
            Shape::Cross => sized_glyph(STAR_CHARS, cells),
            Shape::Diamond => sized_glyph(DUST_CHARS, cells),
            Shape::Square => sized_glyph(SPARK_CHARS, cells),
        };
        self.ink(x, y, glyph, color, alpha);
    }

    fn streak(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb, alpha: f32) {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let steps = (dx.abs() / self.cell_width)
            .max(dy.abs() / self.cell_height)
            .ceil()
            .clamp(1.0, 256.0) as usize;

        // Compare in cell units so the glyph matches what the eye sees
        let (cdx, cdy) = (dx / self.cell_width, dy / self.cell_height);
        let glyph = if cdx.abs() > cdy.abs() * 2.0 {
            STREAK_CHARS[0]
        } else if cdy.abs() > cdx.abs() * 2.0 {
            STREAK_CHARS[1]
        } else if (cdx > 0.0) == (cdy > 0.0) {
            STREAK_CHARS[2]
        } else {
            STREAK_CHARS[3]
        };

        // Skip the head cell; the caller draws its own head sprite
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.ink(x0 + dx * t, y0 + dy * t, glyph, color, alpha * (1.0 - t));
        }
    }
}

/// Vertical brightness of a curtain at fraction `s` from its top edge.
fn curtain_profile(s: f32) -> f32 {
    const STOPS: [(f32, f32); 5] = [(0.0, 0.0), (0.2, 0.4), (0.5, 1.0), (0.8, 0.4), (1.0, 0.0)];
    STOPS
        .windows(2)
        .find(|w| s <= w[1].0)
        .map_or(0.0, |w| {
            let (s0, v0) = w[0];
            let (s1, v1) = w[1];
            v0 + (v1 - v0) * ((s - s0) / (s1 - s0)).clamp(0.0, 1.0)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    impl TerminalSurface {
        fn cell(&self, col: u16, row: u16) -> Option<(char, Rgb, Rgb)> {
            self.index(col as i32, row as i32)
                .map(|i| (self.cells[i].glyph, self.cells[i].fg, self.cells[i].bg))
        }
    }

    fn surface() -> TerminalSurface {
        let mut s = TerminalSurface::with_cell_size(10, 5, 8.0, 16.0);
        s.clear(Rgb::BLACK);
        s
    }

    #[test]
    fn test_empty_terminal_has_no_viewport() {
        assert!(TerminalSurface::new(0, 24).viewport().is_none());
        assert!(TerminalSurface::new(80, 0).viewport().is_none());
        let vp = TerminalSurface::new(80, 24).viewport().unwrap();
        assert_eq!((vp.width(), vp.height()), (640.0, 384.0));
    }

    #[test]
    fn test_sprite_lands_in_cell() {
        let mut s = surface();
        s.sprite(20.0, 40.0, 12.0, Shape::Cross, Rgb::WHITE, 1.0);
        let (glyph, fg, _) = s.cell(2, 2).unwrap();
        assert_eq!(glyph, '✧');
        assert_eq!(fg, Rgb::WHITE);
        // Outside the grid is ignored
        s.sprite(-5.0, 40.0, 12.0, Shape::Cross, Rgb::WHITE, 1.0);
        s.sprite(f32::NAN, 40.0, 12.0, Shape::Cross, Rgb::WHITE, 1.0);
    }

    #[test]
    fn test_brightest_glyph_wins() {
        let mut s = surface();
        s.sprite(4.0, 8.0, 12.0, Shape::Cross, Rgb::WHITE, 0.9);
        s.sprite(4.0, 8.0, 1.0, Shape::Diamond, Rgb::WHITE, 0.2);
        assert_eq!(s.cell(0, 0).unwrap().0, '✧');
    }

    #[test]
    fn test_faint_sprites_are_dropped() {
        let mut s = surface();
        s.sprite(4.0, 8.0, 12.0, Shape::Cross, Rgb::WHITE, 0.01);
        assert_eq!(s.cell(0, 0).unwrap().0, ' ');
    }

    #[test]
    fn test_glow_tints_background() {
        let mut s = surface();
        s.glow(40.0, 40.0, 30.0, Rgb::new(200, 0, 200), 1.0);
        let (_, _, center) = s.cell(5, 2).unwrap();
        let (_, _, corner) = s.cell(0, 0).unwrap();
        assert!(center.r > 0);
        assert_eq!(corner, Rgb::BLACK);
    }

    #[test]
    fn test_curtain_is_brightest_in_the_middle() {
        let mut s = surface();
        let green = Rgb::new(0, 255, 0);
        s.curtain(20.0, 0.0, 80.0, green, 1.0);
        let edge = s.cell(2, 0).unwrap().2;
        let middle = s.cell(2, 2).unwrap().2;
        assert!(middle.g > edge.g);
        assert!(edge.g > 0);
        assert_eq!(s.cell(3, 2).unwrap().2, Rgb::BLACK);

        // Inverted or off-grid bands leave the grid untouched
        let mut t = surface();
        t.curtain(20.0, 60.0, 10.0, green, 1.0);
        t.curtain(-20.0, 0.0, 80.0, green, 1.0);
        for row in 0..5 {
            for col in 0..10 {
                assert_eq!(t.cell(col, row).unwrap().2, Rgb::BLACK);
            }
        }
    }

    #[test]
    fn test_curtain_profile_shape() {
        assert_eq!(curtain_profile(0.0), 0.0);
        assert!((curtain_profile(0.2) - 0.4).abs() < 1e-6);
        assert!((curtain_profile(0.5) - 1.0).abs() < 1e-6);
        assert!((curtain_profile(0.65) - 0.7).abs() < 1e-5);
        assert_eq!(curtain_profile(1.0), 0.0);
    }

    #[test]
    fn test_streak_direction_glyph() {
        let mut s = surface();
        s.streak(4.0, 8.0, 60.0, 8.0, Rgb::WHITE, 1.0);
        assert_eq!(s.cell(1, 0).unwrap().0, '─');
        assert_eq!(s.cell(0, 0).unwrap().0, ' ');
    }

    #[test]
    fn test_lines_match_grid() {
        let s = surface();
        let lines = s.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.spans.len() == 10));
    }
}
