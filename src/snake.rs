use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Segments nearest the head that never count as a self-collision.
///
/// Right after a turn the head, neck, and shoulder can sit on adjacent or
/// shared cells, so only indices from here on are checked.
pub const COLLISION_EXEMPT_SEGMENTS: usize = 3;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped onto the torus on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell one step towards `direction`, unwrapped.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, extent: i32) -> i32 {
    value.rem_euclid(extent)
}

/// Snake body stored in a segment buffer sized for the whole board.
///
/// The buffer is allocated once with room for every cell, so ticking and
/// growing never reallocate. Growth past that capacity is a logic error and
/// panics.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Position>,
    capacity: usize,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Lays out `length` segments in a horizontal line ending at `head`,
    /// each one cell to the left of the previous, heading right.
    ///
    /// Coordinates are taken as given: a `head.x` smaller than `length - 1`
    /// leaves trailing segments at negative x until the first tick wraps them.
    ///
    /// # Panics
    ///
    /// Panics when `length` is zero or exceeds `capacity`.
    #[must_use]
    pub fn new(head: Position, length: usize, capacity: usize) -> Self {
        assert!(length >= 1, "snake needs at least one segment");
        assert!(
            length <= capacity,
            "snake length {length} exceeds board capacity {capacity}"
        );

        let mut segments = Vec::with_capacity(capacity);
        let mut x = head.x;
        for _ in 0..length {
            segments.push(Position { x, y: head.y });
            x -= 1;
        }

        Self {
            segments,
            capacity,
            direction: Direction::Right,
            pending_direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit segments (index 0 is the head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty or longer than `capacity`.
    #[must_use]
    pub fn from_segments(
        mut segments: Vec<Position>,
        direction: Direction,
        capacity: usize,
    ) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        assert!(
            segments.len() <= capacity,
            "snake length {} exceeds board capacity {capacity}",
            segments.len()
        );
        segments.reserve_exact(capacity - segments.len());

        Self {
            segments,
            capacity,
            direction,
            pending_direction: direction,
        }
    }

    /// Stores `direction` for the next tick, replacing any earlier request.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// Moves the snake one cell.
    ///
    /// The pending direction is adopted unless it reverses the current one.
    /// Every body segment then takes the pre-tick cell of the segment ahead
    /// of it, the head steps one cell, and all segments are wrapped.
    pub fn advance(&mut self, bounds: GridSize) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        if direction_change_is_valid(self.direction, self.pending_direction) {
            self.direction = self.pending_direction;
        }

        let head = self.head();
        let len = self.segments.len();
        self.segments.copy_within(0..len - 1, 1);
        self.segments[0] = head.stepped(self.direction);

        for segment in &mut self.segments {
            *segment = segment.wrapped(bounds);
        }
    }

    /// Appends a copy of the tail; the next tick pulls it into place.
    ///
    /// # Panics
    ///
    /// Panics when the snake already fills its capacity.
    pub fn grow(&mut self) {
        assert!(
            !self.is_full(),
            "snake growth past board capacity of {} cells",
            self.capacity
        );
        let tail = self.tail();
        self.segments.push(tail);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Returns true if the head shares a cell with a non-exempt body segment.
    #[must_use]
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .skip(COLLISION_EXEMPT_SEGMENTS)
            .any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true when no further growth is possible.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    /// Direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction requested for the next tick, before arbitration.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }
}
