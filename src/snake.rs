use crate::{Cell, GridInt};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

pub struct Snake {
    segments: Vec<Cell>,
    direction: Direction,
    grow_pending: bool,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Snake { segments: vec![head], direction: Right, grow_pending: false }
    }

    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances the head one cell in the current direction. Returns false on
    /// a wall or body hit, leaving the segments untouched.
    pub fn move_step(&mut self, extent: GridInt) -> bool {
        let (dx, dy) = self.direction.delta();
        let head = self.segments[0];
        let new_head = (head.0 + dx, head.1 + dy);

        if new_head.0 < 0 || new_head.0 >= extent ||
           new_head.1 < 0 || new_head.1 >= extent {
               return false;
           }

        // The current tail cell is fair game: it vacates this very tick on a
        // non-growth move, so following it closely is not a crash. Checking
        // the full body here would wrongly kill a snake chasing its own tail.
        let len = self.segments.len();
        if self.segments[..len - 1].contains(&new_head) {
            return false;
        }

        self.segments.insert(0, new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.segments.pop();
        }

        true
    }

    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn change_direction(&mut self, new_direction: Direction) {
        match (new_direction, self.direction) {
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right) => {},
            _ => self.direction = new_direction,
        };
    }
}
