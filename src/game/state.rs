use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::Direction;

/// A position on the game canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one unit in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// True when both axis distances are strictly below `reach`
    pub fn is_near(&self, other: Position, reach: i32) -> bool {
        (self.x - other.x).abs() < reach && (self.y - other.y).abs() < reach
    }
}

/// Inclusive margins of the playable canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CanvasBounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// Handle of a drawn trail segment, used to erase it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub id: SegmentId,
    pub position: Position,
}

/// Positions the head has visited, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trail {
    segments: VecDeque<Segment>,
    next_id: u64,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position as the newest segment
    pub fn push(&mut self, position: Position) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.segments.push_back(Segment { id, position });
        id
    }

    /// Evict the oldest segments until at most `bound` remain.
    ///
    /// Returns the handles of the evicted segments, oldest first.
    pub fn trim_to(&mut self, bound: usize) -> Vec<SegmentId> {
        let excess = self.segments.len().saturating_sub(bound);
        self.segments.drain(..excess).map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Newest segment
    pub fn newest(&self) -> Option<&Segment> {
        self.segments.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodItem {
    pub position: Position,
    pub size: i32,
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the canvas margins
    Wall,
    /// Head ran into an older part of the trail
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub head: Position,
    /// Direction used by the next tick; unset until the first key press
    pub direction: Option<Direction>,
    /// Direction committed by the latest input, guards against reversal
    pub previous_direction: Option<Direction>,
    pub trail: Trail,
    /// Fixed set of food slots
    pub food: Vec<FoodItem>,
    pub score: u32,
    /// Upper bound on the trail length
    pub length: usize,
    pub bounds: CanvasBounds,
    pub head_size: i32,
    pub ticks: u64,
    pub is_alive: bool,
}

impl GameState {
    /// Create a running state with the head drawn at `head`
    pub fn new(
        head: Position,
        food: Vec<FoodItem>,
        length: usize,
        bounds: CanvasBounds,
        head_size: i32,
    ) -> Self {
        let mut trail = Trail::new();
        trail.push(head);

        Self {
            head,
            direction: None,
            previous_direction: None,
            trail,
            food,
            score: 0,
            length,
            bounds,
            head_size,
            ticks: 0,
            is_alive: true,
        }
    }

    /// Request a new direction.
    ///
    /// The request is dropped when it reverses `previous_direction`. Either
    /// way `previous_direction` ends up equal to the resulting direction.
    /// Returns whether the request was taken.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if !self.is_alive {
            return false;
        }

        let accepted = self
            .previous_direction
            .is_none_or(|previous| !previous.is_opposite(requested));
        if accepted {
            self.direction = Some(requested);
        }
        self.previous_direction = self.direction;

        accepted
    }

    /// Slot of the first food item within reach of the head
    pub fn food_under_head(&self) -> Option<usize> {
        self.food
            .iter()
            .position(|item| item.position.is_near(self.head, self.head_size))
    }

    /// Whether the head touches a segment more than two head sizes back.
    ///
    /// Recent segments always overlap the head and are skipped.
    pub fn bites_itself(&self) -> bool {
        let recent = 2 * self.head_size.max(0) as usize;
        let older = self.trail.len().saturating_sub(recent);

        self.trail
            .iter()
            .take(older)
            .any(|segment| segment.position.is_near(self.head, self.head_size))
    }
}
