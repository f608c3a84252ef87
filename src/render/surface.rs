use std::collections::BTreeMap;

use crate::game::{GameEvent, Position, SegmentId, SnakeColor};

/// Something the game can draw on
pub trait RenderSurface {
    fn draw_segment(&mut self, id: SegmentId, position: Position, size: i32, color: SnakeColor);
    fn erase_segment(&mut self, id: SegmentId);
    fn draw_food(&mut self, slot: usize, position: Position, size: i32);
    fn erase_food(&mut self, slot: usize);

    /// Forward a drawing command. Notifications are not drawing commands and
    /// are skipped.
    fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::DrawSegment {
                id,
                position,
                size,
                color,
            } => self.draw_segment(id, position, size, color),
            GameEvent::EraseSegment { id } => self.erase_segment(id),
            GameEvent::DrawFood {
                slot,
                position,
                size,
            } => self.draw_food(slot, position, size),
            GameEvent::EraseFood { slot } => self.erase_food(slot),
            GameEvent::GameOver { .. } => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub position: Position,
    pub size: i32,
}

/// Retained record of everything currently drawn
#[derive(Debug, Default)]
pub struct DisplayList {
    segments: BTreeMap<SegmentId, (Sprite, SnakeColor)>,
    food: BTreeMap<usize, Sprite>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments oldest first
    pub fn segments(&self) -> impl Iterator<Item = (&Sprite, SnakeColor)> {
        self.segments.values().map(|(sprite, color)| (sprite, *color))
    }

    pub fn food(&self) -> impl Iterator<Item = &Sprite> {
        self.food.values()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }
}

impl RenderSurface for DisplayList {
    fn draw_segment(&mut self, id: SegmentId, position: Position, size: i32, color: SnakeColor) {
        self.segments.insert(id, (Sprite { position, size }, color));
    }

    fn erase_segment(&mut self, id: SegmentId) {
        self.segments.remove(&id);
    }

    fn draw_food(&mut self, slot: usize, position: Position, size: i32) {
        self.food.insert(slot, Sprite { position, size });
    }

    fn erase_food(&mut self, slot: usize) {
        self.food.remove(&slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, GameEngine};

    #[test]
    fn test_display_list_mirrors_trail() {
        let config = GameConfig {
            initial_length: 5,
            ..Default::default()
        };
        let mut engine = GameEngine::with_seed(config, 11);
        let mut state = engine.reset();
        for item in &mut state.food {
            item.position = Position::new(600, 360);
        }

        let mut display = DisplayList::new();
        for event in engine.paint_events(&state) {
            display.apply(&event);
        }
        assert_eq!(display.segment_count(), 1);
        assert_eq!(display.food_count(), 10);

        engine.on_direction_input(&mut state, Direction::Down);
        for _ in 0..12 {
            for event in engine.step(&mut state).events {
                display.apply(&event);
            }
        }

        assert_eq!(display.segment_count(), state.trail.len());
        let drawn: Vec<Position> = display.segments().map(|(s, _)| s.position).collect();
        let expected: Vec<Position> = state.trail.iter().map(|s| s.position).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_food_slot_redraw() {
        let mut display = DisplayList::new();
        display.draw_food(3, Position::new(10, 10), 8);
        display.apply(&GameEvent::EraseFood { slot: 3 });
        assert_eq!(display.food_count(), 0);
        display.apply(&GameEvent::DrawFood {
            slot: 3,
            position: Position::new(50, 60),
            size: 8,
        });
        assert_eq!(
            display.food().next(),
            Some(&Sprite {
                position: Position::new(50, 60),
                size: 8
            })
        );
    }
}
