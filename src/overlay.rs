//! Text overlay side channel
//!
//! The score and prompts are not rasterized into the pixel surface; they go
//! to a separate character display addressed in character cells.

/// Receiver of overlay text, redrawn once per presented frame
pub trait ScoreOverlay {
    fn render_text(&mut self, x: u16, y: u16, text: &str);
}

/// One recorded overlay write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub x: u16,
    pub y: u16,
    pub text: String,
}

/// Overlay that keeps the lines written since the last `clear`
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    pub lines: Vec<TextLine>,
}

impl TextBuffer {
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Text written at exactly (x, y), if any
    pub fn text_at(&self, x: u16, y: u16) -> Option<&str> {
        self.lines
            .iter()
            .rev()
            .find(|l| l.x == x && l.y == y)
            .map(|l| l.text.as_str())
    }
}

impl ScoreOverlay for TextBuffer {
    fn render_text(&mut self, x: u16, y: u16, text: &str) {
        self.lines.push(TextLine {
            x,
            y,
            text: text.to_string(),
        });
    }
}
