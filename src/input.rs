use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the one-cell translation for this direction.
    ///
    /// `y` grows downward, so `Up` is `(0, -1)`.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Latches the player's intended direction between ticks.
///
/// `set_intent` is unconditional last-write-wins; legality against the
/// previous tick's effective direction is only decided at `consume` time,
/// so a player holding the reverse arrow never stalls later legal input.
#[derive(Debug, Clone, Copy)]
pub struct DirectionLatch {
    intent: Direction,
}

impl DirectionLatch {
    /// Creates a latch holding the initial movement direction.
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self { intent: initial }
    }

    /// Records the player's desired direction, replacing any earlier intent.
    pub fn set_intent(&mut self, direction: Direction) {
        self.intent = direction;
    }

    /// Returns the direction to apply this tick.
    ///
    /// An intent that exactly reverses `last_effective` is ignored and the
    /// previous direction is kept; the body keeps moving the way it was.
    #[must_use]
    pub fn consume(&self, last_effective: Direction) -> Direction {
        if self.intent == last_effective.opposite() {
            last_effective
        } else {
            self.intent
        }
    }
}

/// High-level input events consumed by the main loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Polls the terminal for one input event, waiting at most `timeout`.
///
/// Returns `Ok(None)` on timeout, on key release, and on keys without a
/// game binding.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Release {
            return Ok(map_key(key.code));
        }
    }

    Ok(None)
}

/// Maps a key code to a game input.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{map_key, Direction, DirectionLatch, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn latch_passes_through_legal_intent() {
        let mut latch = DirectionLatch::new(Direction::Right);

        latch.set_intent(Direction::Up);

        assert_eq!(latch.consume(Direction::Right), Direction::Up);
    }

    #[test]
    fn latch_ignores_exact_reversal() {
        let mut latch = DirectionLatch::new(Direction::Right);

        latch.set_intent(Direction::Left);

        assert_eq!(latch.consume(Direction::Right), Direction::Right);
    }

    #[test]
    fn latch_is_last_write_wins() {
        let mut latch = DirectionLatch::new(Direction::Right);

        latch.set_intent(Direction::Up);
        latch.set_intent(Direction::Down);

        assert_eq!(latch.consume(Direction::Right), Direction::Down);
    }

    #[test]
    fn rejected_reversal_does_not_clear_the_latch() {
        let mut latch = DirectionLatch::new(Direction::Right);

        latch.set_intent(Direction::Left);
        // Rejected against Right, but legal once the body turns Up.
        assert_eq!(latch.consume(Direction::Right), Direction::Right);
        assert_eq!(latch.consume(Direction::Up), Direction::Left);
    }

    #[test]
    fn arrow_and_wasd_keys_map_to_directions() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Char('a')),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(map_key(KeyCode::Enter), Some(GameInput::Restart));
        assert_eq!(map_key(KeyCode::Char('q')), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
