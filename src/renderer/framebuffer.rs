//! Double-buffered presentation
//!
//! The display owns two surfaces. Drawing always targets the back one; a
//! present waits for the display's refresh, then flips which surface is shown.
//! Callers hold a `SurfaceId` for the current back surface and must refresh it
//! after every present.

use super::color::BACKGROUND;
use super::surface::Surface;

/// Handle to one of a device's surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

/// A display with a front (shown) and back (drawn) surface
pub trait FrameBufferDevice {
    /// Wait for the previous swap's refresh to finish, then exchange the
    /// front and back roles.
    fn present_and_swap(&mut self);

    /// The surface subsequent pixel writes should target
    fn back_surface_id(&self) -> SurfaceId;

    fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface;
}

/// Two in-memory surfaces with a flip index
#[derive(Debug, Clone)]
pub struct DoubleBuffer {
    surfaces: [Surface; 2],
    back: usize,
    swaps: u64,
}

impl DoubleBuffer {
    /// Both surfaces start cleared to the background color
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            surfaces: [
                Surface::new(width, height, BACKGROUND),
                Surface::new(width, height, BACKGROUND),
            ],
            back: 1,
            swaps: 0,
        }
    }

    /// The surface currently being shown
    pub fn front(&self) -> &Surface {
        &self.surfaces[1 - self.back]
    }

    pub fn back(&self) -> &Surface {
        &self.surfaces[self.back]
    }

    /// Number of completed presents
    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}

impl FrameBufferDevice for DoubleBuffer {
    fn present_and_swap(&mut self) {
        self.back = 1 - self.back;
        self.swaps += 1;
    }

    fn back_surface_id(&self) -> SurfaceId {
        SurfaceId(self.back)
    }

    fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface {
        &mut self.surfaces[id.0 & 1]
    }
}
