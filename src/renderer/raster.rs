//! Integer rasterization primitives
//!
//! Everything is built on `plot_pixel`, which silently drops off-surface
//! writes, so lines and discs may hang over any edge.

use super::color::Color;
use super::surface::Surface;
use crate::sim::Ball;

/// Write one pixel if (x, y) lies on the surface
#[inline]
pub fn plot_pixel(surface: &mut Surface, x: i32, y: i32, color: Color) {
    surface.set(x, y, color);
}

/// Bresenham line from (x0, y0) towards (x1, y1).
///
/// The end column of the working frame is exclusive. Steep lines are walked
/// along y by swapping coordinates, and endpoints are normalized so the walk
/// always goes in +x; the same pixels are produced whichever end is given
/// first.
pub fn draw_line(surface: &mut Surface, mut x0: i32, mut y0: i32, mut x1: i32, mut y1: i32, color: Color) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let delta_x = x1 - x0;
    let delta_y = (y1 - y0).abs();
    let mut error = -(delta_x / 2);
    let step_y = (y1 - y0).signum();

    let mut y = y0;
    for x in x0..x1 {
        if steep {
            plot_pixel(surface, y, x, color);
        } else {
            plot_pixel(surface, x, y, color);
        }

        error += delta_y;
        if error >= 0 {
            y += step_y;
            error -= delta_x;
        }
    }
}

/// Filled disc via the midpoint circle walk.
///
/// Each step draws the four horizontal chords joining the eight symmetric
/// octant points, so the interior is filled by the same pass that finds the
/// rim. The walk runs through the diagonal (`count == r`) so the rows around
/// 45 degrees are not left empty.
pub fn draw_circle(surface: &mut Surface, ball: &Ball) {
    let (x, y) = (ball.pos.x, ball.pos.y);
    let color = ball.color;
    let mut r = ball.radius;
    let mut count = 0;
    let mut d = 1 - r;

    while count <= r {
        draw_line(surface, x - count, y + r, x + count, y + r, color);
        draw_line(surface, x - r, y + count, x + r, y + count, color);
        draw_line(surface, x - count, y - r, x + count, y - r, color);
        draw_line(surface, x - r, y - count, x + r, y - count, color);

        if d < 0 {
            d += 2 * count + 3;
        } else {
            d += 2 * (count - r) + 5;
            r -= 1;
        }
        count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::{BLACK, RED, WHITE};
    use glam::IVec2;
    use proptest::prelude::*;

    fn lit(surface: &Surface) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if surface.get(x, y) != Some(BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn disc(x: i32, y: i32, radius: i32) -> Ball {
        Ball {
            pos: IVec2::new(x, y),
            radius,
            color: RED,
            ..Ball::default()
        }
    }

    #[test]
    fn horizontal_line_excludes_end_column() {
        let mut s = Surface::new(20, 5, BLACK);
        draw_line(&mut s, 2, 1, 6, 1, WHITE);
        assert_eq!(lit(&s), vec![(2, 1), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn vertical_line_walks_along_y() {
        let mut s = Surface::new(5, 20, BLACK);
        draw_line(&mut s, 2, 9, 2, 3, WHITE);
        let pixels = lit(&s);
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|&(x, y)| x == 2 && (3..9).contains(&y)));
    }

    #[test]
    fn diagonal_line_steps_every_column() {
        let mut s = Surface::new(10, 10, BLACK);
        draw_line(&mut s, 0, 0, 4, 4, WHITE);
        assert_eq!(lit(&s), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn degenerate_line_draws_nothing() {
        let mut s = Surface::new(10, 10, BLACK);
        draw_line(&mut s, 5, 5, 5, 5, WHITE);
        assert!(lit(&s).is_empty());
    }

    #[test]
    fn line_crossing_the_edge_is_clipped() {
        let mut s = Surface::new(10, 10, BLACK);
        draw_line(&mut s, -5, 2, 15, 2, WHITE);
        assert_eq!(lit(&s).len(), 10);
    }

    #[test]
    fn disc_is_filled_not_outlined() {
        let mut s = Surface::new(64, 64, BLACK);
        let (cx, cy, r) = (32, 32, 10);
        draw_circle(&mut s, &disc(cx, cy, r));

        for y in 0..64 {
            for x in 0..64 {
                let d2 = (x - cx).pow(2) + (y - cy).pow(2);
                if d2 <= (r - 2).pow(2) {
                    assert_eq!(s.get(x, y), Some(RED), "hole at ({x}, {y})");
                }
                if d2 > (r + 1).pow(2) {
                    assert_eq!(s.get(x, y), Some(BLACK), "spill at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn every_row_of_a_disc_is_lit() {
        // Rows near 45 degrees are only reached when the walk includes the
        // diagonal; r = 3, 6, 7, 10 are among the radii that expose a gap.
        for r in 2..=30 {
            let mut s = Surface::new(81, 81, BLACK);
            draw_circle(&mut s, &disc(40, 40, r));
            for dy in -r..=r {
                let y = 40 + dy;
                assert!(
                    (0..81).any(|x| s.get(x, y) == Some(RED)),
                    "radius {r}: row {dy} is empty"
                );
            }
        }
    }

    #[test]
    fn unit_disc_is_visible() {
        let mut s = Surface::new(10, 10, BLACK);
        draw_circle(&mut s, &disc(5, 5, 1));
        assert_eq!(s.get(5, 5), Some(RED));
        assert_eq!(lit(&s), vec![(4, 5), (5, 5)]);
    }

    #[test]
    fn disc_hanging_off_the_corner_is_clipped() {
        let mut s = Surface::new(20, 20, BLACK);
        draw_circle(&mut s, &disc(0, 0, 6));
        assert_eq!(s.get(0, 0), Some(RED));
        assert_eq!(s.get(19, 19), Some(BLACK));
    }

    proptest! {
        #[test]
        fn line_is_direction_symmetric(
            x0 in -40i32..360, y0 in -40i32..280,
            x1 in -40i32..360, y1 in -40i32..280,
        ) {
            let mut forward = Surface::new(320, 240, BLACK);
            let mut backward = Surface::new(320, 240, BLACK);
            draw_line(&mut forward, x0, y0, x1, y1, WHITE);
            draw_line(&mut backward, x1, y1, x0, y0, WHITE);
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn off_surface_plot_leaves_surface_untouched(
            x in prop_oneof![-1000i32..0, 320i32..1000],
            y in -1000i32..1000,
        ) {
            let mut s = Surface::new(320, 240, BLACK);
            plot_pixel(&mut s, x, y, WHITE);
            plot_pixel(&mut s, y.rem_euclid(320), -1 - x.abs(), WHITE);
            plot_pixel(&mut s, y.rem_euclid(320), 240 + x.abs(), WHITE);
            prop_assert_eq!(s.count_not(BLACK), 0);
        }
    }
}
