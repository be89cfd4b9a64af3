//! Writable pixel surface
//!
//! Row-major, one `Color` per pixel. Coordinates are signed so callers can
//! hand in off-surface points and let the surface discard them.

use super::color::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Create a surface filled with `fill`
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Pixel at (x, y), `None` off the surface
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.in_bounds(x, y).then(|| self.pixels[self.index(x, y)])
    }

    /// Write a pixel; returns false (and writes nothing) off the surface
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.index(x, y);
        self.pixels[i] = color;
        true
    }

    /// Reset every pixel that isn't already `background`.
    ///
    /// Scans the whole surface because the previous frame's dirty region is
    /// not tracked. Returns the number of pixels rewritten.
    pub fn clear_dirty(&mut self, background: Color) -> usize {
        let mut cleared = 0;
        for px in self.pixels.iter_mut().filter(|px| **px != background) {
            *px = background;
            cleared += 1;
        }
        cleared
    }

    /// Number of pixels not equal to `background`
    pub fn count_not(&self, background: Color) -> usize {
        self.pixels.iter().filter(|&&px| px != background).count()
    }

    /// Raw pixel rows
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::{BLACK, RED};

    #[test]
    fn set_and_get_in_bounds() {
        let mut s = Surface::new(4, 3, BLACK);
        assert!(s.set(3, 2, RED));
        assert_eq!(s.get(3, 2), Some(RED));
        assert_eq!(s.get(0, 0), Some(BLACK));
    }

    #[test]
    fn off_surface_writes_are_discarded() {
        let mut s = Surface::new(4, 3, BLACK);
        let before = s.clone();
        for (x, y) in [(-1, 0), (4, 0), (0, -1), (0, 3), (i32::MIN, i32::MAX)] {
            assert!(!s.set(x, y, RED));
            assert_eq!(s.get(x, y), None);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn clear_dirty_only_touches_drawn_pixels() {
        let mut s = Surface::new(10, 10, BLACK);
        s.set(1, 1, RED);
        s.set(9, 9, RED);
        assert_eq!(s.count_not(BLACK), 2);
        assert_eq!(s.clear_dirty(BLACK), 2);
        assert_eq!(s.count_not(BLACK), 0);
        assert_eq!(s.clear_dirty(BLACK), 0);
    }

    #[test]
    fn rows_cover_the_surface() {
        let s = Surface::new(5, 2, BLACK);
        let rows: Vec<_> = s.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 5));
    }
}
