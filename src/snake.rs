use std::collections::VecDeque;

use crate::grid::Cell;

/// Ordered body of the snake, head at the front.
///
/// Holds occupancy only; movement decisions (direction, collision, growth)
/// are made by the game state, which drives `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Appends `next_head` and, unless `grow` is set, drops the tail.
    ///
    /// Growth and movement are a single head append; a growing tick simply
    /// skips the tail removal.
    pub fn advance(&mut self, next_head: Cell, grow: bool) {
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;

    use super::Snake;

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 5));

        snake.advance(Cell::new(6, 5), false);

        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Cell::new(5, 5));

        snake.advance(Cell::new(6, 5), true);

        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 2);
        assert!(snake.occupies(Cell::new(5, 5)));
    }

    #[test]
    fn occupies_covers_every_segment() {
        let snake = Snake::from_segments(vec![
            Cell::new(3, 3),
            Cell::new(2, 3),
            Cell::new(1, 3),
        ]);

        assert!(snake.occupies(Cell::new(3, 3)));
        assert!(snake.occupies(Cell::new(1, 3)));
        assert!(!snake.occupies(Cell::new(4, 3)));
    }

    #[test]
    fn segments_run_head_to_tail() {
        let mut snake = Snake::new(Cell::new(1, 1));
        snake.advance(Cell::new(2, 1), true);
        snake.advance(Cell::new(3, 1), true);

        let order: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            order,
            vec![Cell::new(3, 1), Cell::new(2, 1), Cell::new(1, 1)]
        );
    }
}
