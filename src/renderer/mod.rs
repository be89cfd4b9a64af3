//! Software rendering onto 16-bit surfaces

pub mod color;
pub mod framebuffer;
pub mod raster;
pub mod surface;

pub use color::Color;
pub use framebuffer::{DoubleBuffer, FrameBufferDevice, SurfaceId};
pub use raster::{draw_circle, draw_line, plot_pixel};
pub use surface::Surface;

use crate::sim::World;

/// Rasterize every live entity: player first, then food, then AI on top.
pub fn draw_world(surface: &mut Surface, world: &World) {
    if world.player.alive {
        draw_circle(surface, &world.player);
    }
    for food in world.food.iter().filter(|f| f.alive) {
        draw_circle(surface, food);
    }
    for ai in world.ai.iter().filter(|a| a.alive) {
        draw_circle(surface, ai);
    }
}
