/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A decoded keyboard action for the typewriter.
///
/// The host's input layer produces these from raw key events. Tab is never
/// translated into an intent; it stays with the host for focus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Type a printable character
    Char(char),
    /// Delete left of the cursor, joining lines at column 1
    Backspace,
    /// Delete under the cursor, joining lines at the end
    Delete,
    /// Split the line at the cursor
    Enter,
    /// Arrow keys
    Move(Direction),
    /// Jump to column 1
    Home,
    /// Jump past the last character of the line
    End,
    PageUp,
    PageDown,
    /// Flip between insert and overwrite
    ToggleInsert,
}
