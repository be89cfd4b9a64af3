//! Discrete input commands
//!
//! Front-ends decode their own key events into these; the simulation never
//! sees raw key codes.

use glam::IVec2;

/// A command from the input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Start,
    Pause,
}

impl Command {
    /// Unit direction for movement commands (screen coordinates, y down)
    pub fn direction(self) -> Option<IVec2> {
        match self {
            Command::Up => Some(IVec2::new(0, -1)),
            Command::Down => Some(IVec2::new(0, 1)),
            Command::Left => Some(IVec2::new(-1, 0)),
            Command::Right => Some(IVec2::new(1, 0)),
            Command::Start | Command::Pause => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_commands_have_directions() {
        assert_eq!(Command::Up.direction(), Some(IVec2::new(0, -1)));
        assert_eq!(Command::Right.direction(), Some(IVec2::new(1, 0)));
        assert_eq!(Command::Start.direction(), None);
        assert_eq!(Command::Pause.direction(), None);
    }
}
