//! Terminal front-end
//!
//! Shows the front surface in the alternate screen using '▀' cells (one
//! terminal cell = two stacked pixel blocks), downsampled to fit. Presents are
//! paced to the configured frame rate, which stands in for vertical sync.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
    EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};

use crate::input::Command;
use crate::overlay::{ScoreOverlay, TextBuffer};
use crate::renderer::color::{BACKGROUND, Color, to_rgb888};
use crate::renderer::{DoubleBuffer, FrameBufferDevice, Surface, SurfaceId};

/// Commands read since the last poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    pub commands: Vec<Command>,
    /// Q, Esc or Ctrl-C
    pub quit: bool,
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Command(Command),
    Quit,
}

fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Some(KeyAction::Quit);
    }
    let cmd = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Right,
        KeyCode::Enter => Command::Start,
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Command::Pause,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(KeyAction::Quit),
        _ => return None,
    };
    Some(KeyAction::Command(cmd))
}

/// Pixels per cell edge so a `width` x `height` surface fits in
/// `cols` x `rows` half-block cells
fn fit_scale(width: i32, height: i32, cols: u16, rows: u16) -> i32 {
    let cols = i32::from(cols.max(1));
    let rows = i32::from(rows.max(1));
    let sx = (width + cols - 1) / cols;
    let sy = (height + 2 * rows - 1) / (2 * rows);
    sx.max(sy).max(1)
}

/// First non-background pixel in the `scale` x `scale` block at (x, y)
fn sample_block(surface: &Surface, x: i32, y: i32, scale: i32) -> Color {
    for dy in 0..scale {
        for dx in 0..scale {
            match surface.get(x + dx, y + dy) {
                Some(px) if px != BACKGROUND => return px,
                _ => {}
            }
        }
    }
    BACKGROUND
}

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = to_rgb888(color);
    TermColor::Rgb { r, g, b }
}

pub struct TerminalDisplay {
    out: Stdout,
    buffers: DoubleBuffer,
    pending: TextBuffer,
    frame_time: Duration,
    last_present: Instant,
}

impl TerminalDisplay {
    /// Take over the terminal (raw mode, alternate screen)
    pub fn new(width: i32, height: i32, frame_rate: u32) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap, Clear(ClearType::All))?;
        Ok(Self {
            out,
            buffers: DoubleBuffer::new(width, height),
            pending: TextBuffer::default(),
            frame_time: Duration::from_secs(1) / frame_rate.max(1),
            last_present: Instant::now(),
        })
    }

    /// Drain pending key events without blocking
    pub fn poll_input(&mut self) -> io::Result<InputBatch> {
        let mut batch = InputBatch::default();
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match map_key(key) {
                Some(KeyAction::Command(cmd)) => batch.commands.push(cmd),
                Some(KeyAction::Quit) => batch.quit = true,
                None => {}
            }
            if batch.commands.len() >= 32 {
                break;
            }
        }
        Ok(batch)
    }

    /// Draw the back surface and the pending overlay text
    fn draw(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let Self {
            out,
            buffers,
            pending,
            ..
        } = self;
        let surface = buffers.back();
        let scale = fit_scale(surface.width(), surface.height(), cols, rows);
        let cell_cols = ((surface.width() + scale - 1) / scale).min(i32::from(cols));
        let cell_rows = ((surface.height() + 2 * scale - 1) / (2 * scale)).min(i32::from(rows));

        queue!(out, BeginSynchronizedUpdate)?;
        for cy in 0..cell_rows {
            queue!(out, cursor::MoveTo(0, cy as u16))?;
            let mut last: Option<(Color, Color)> = None;
            for cx in 0..cell_cols {
                let top = sample_block(surface, cx * scale, 2 * cy * scale, scale);
                let bottom = sample_block(surface, cx * scale, (2 * cy + 1) * scale, scale);
                if last != Some((top, bottom)) {
                    queue!(out, SetForegroundColor(term_color(top)), SetBackgroundColor(term_color(bottom)))?;
                    last = Some((top, bottom));
                }
                queue!(out, Print('▀'))?;
            }
        }

        queue!(
            out,
            SetForegroundColor(TermColor::White),
            SetBackgroundColor(TermColor::Black)
        )?;
        for line in &pending.lines {
            if line.y < rows {
                queue!(out, cursor::MoveTo(line.x, line.y), Print(&line.text))?;
            }
        }
        pending.clear();

        queue!(out, ResetColor, EndSynchronizedUpdate)?;
        out.flush()
    }
}

impl FrameBufferDevice for TerminalDisplay {
    fn present_and_swap(&mut self) {
        let due = self.last_present + self.frame_time;
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }

        if let Err(e) = self.draw() {
            log::warn!("Terminal draw failed: {e}");
        }
        self.buffers.present_and_swap();
        self.last_present = Instant::now();
    }

    fn back_surface_id(&self) -> SurfaceId {
        self.buffers.back_surface_id()
    }

    fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface {
        self.buffers.surface_mut(id)
    }
}

impl ScoreOverlay for TerminalDisplay {
    fn render_text(&mut self, x: u16, y: u16, text: &str) {
        self.pending.render_text(x, y, text);
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, EnableLineWrap, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
