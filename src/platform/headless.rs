//! In-memory display for tests and unattended runs

use crate::overlay::{ScoreOverlay, TextBuffer};
use crate::renderer::{DoubleBuffer, FrameBufferDevice, Surface, SurfaceId};

/// Double buffer plus an overlay that keeps the text of the last present
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    pub buffers: DoubleBuffer,
    /// Overlay text shown with the current front surface
    pub text: TextBuffer,
    pending: TextBuffer,
}

impl HeadlessDisplay {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            buffers: DoubleBuffer::new(width, height),
            text: TextBuffer::default(),
            pending: TextBuffer::default(),
        }
    }
}

impl FrameBufferDevice for HeadlessDisplay {
    fn present_and_swap(&mut self) {
        self.buffers.present_and_swap();
        self.text = std::mem::take(&mut self.pending);
    }

    fn back_surface_id(&self) -> SurfaceId {
        self.buffers.back_surface_id()
    }

    fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface {
        self.buffers.surface_mut(id)
    }
}

impl ScoreOverlay for HeadlessDisplay {
    fn render_text(&mut self, x: u16, y: u16, text: &str) {
        self.pending.render_text(x, y, text);
    }
}
