use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::Direction,
    config::{GameConfig, SnakeColor},
    state::{CanvasBounds, CollisionType, FoodItem, GameState, Position, SegmentId},
};

/// Drawing commands and notifications produced by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    DrawSegment {
        id: SegmentId,
        position: Position,
        size: i32,
        color: SnakeColor,
    },
    EraseSegment {
        id: SegmentId,
    },
    DrawFood {
        slot: usize,
        position: Position,
        size: i32,
    },
    EraseFood {
        slot: usize,
    },
    GameOver {
        score: u32,
        cause: CollisionType,
    },
}

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepResult {
    /// Render commands in the order they were produced
    pub events: Vec<GameEvent>,
    /// Whether the game has terminated
    pub terminated: bool,
    pub info: StepInfo,
}

/// The game engine that handles all game logic.
///
/// Generic over the random source so food placement can be replayed.
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from the OS.
    ///
    /// `config` is expected to have passed `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial game state
    pub fn reset(&mut self) -> GameState {
        let bounds = self.config.bounds;
        let food = (0..self.config.food_count)
            .map(|_| self.spawn_food(&bounds))
            .collect();

        GameState::new(
            self.config.start,
            food,
            self.config.initial_length,
            bounds,
            self.config.head_size(),
        )
    }

    /// Draw commands that paint `state` onto an empty surface
    pub fn paint_events(&self, state: &GameState) -> Vec<GameEvent> {
        let segments = state.trail.iter().map(|segment| GameEvent::DrawSegment {
            id: segment.id,
            position: segment.position,
            size: state.head_size,
            color: self.config.snake_color,
        });
        let food = state
            .food
            .iter()
            .enumerate()
            .map(|(slot, item)| GameEvent::DrawFood {
                slot,
                position: item.position,
                size: item.size,
            });

        segments.chain(food).collect()
    }

    /// Apply a direction key press to the state
    pub fn on_direction_input(&self, state: &mut GameState, direction: Direction) -> bool {
        let accepted = state.steer(direction);
        if !accepted && state.is_alive {
            debug!("Ignored reversal towards {:?}", direction);
        }
        accepted
    }

    /// Execute one tick of the game.
    ///
    /// Checks run boundary, food, then self-collision. The trail growth of a
    /// terminal tick is kept.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                ..Default::default()
            };
        }

        state.ticks += 1;

        // A snake without a direction stays put but is still checked
        let mut events = Vec::new();
        if let Some(direction) = state.direction {
            state.head = state.head.moved_in_direction(direction);
            let id = state.trail.push(state.head);
            events.push(GameEvent::DrawSegment {
                id,
                position: state.head,
                size: state.head_size,
                color: self.config.snake_color,
            });
            events.extend(
                state
                    .trail
                    .trim_to(state.length)
                    .into_iter()
                    .map(|id| GameEvent::EraseSegment { id }),
            );
        }

        if !state.bounds.contains(state.head) {
            return Self::game_over(state, CollisionType::Wall, false, events);
        }

        let ate_food = match state.food_under_head() {
            Some(slot) => {
                self.consume_food(state, slot, &mut events);
                true
            }
            None => false,
        };

        if state.bites_itself() {
            return Self::game_over(state, CollisionType::SelfCollision, ate_food, events);
        }

        StepResult {
            events,
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    fn consume_food(&mut self, state: &mut GameState, slot: usize, events: &mut Vec<GameEvent>) {
        state.length += self.config.growth_per_food;
        state.score += self.config.score_per_food;

        let item = self.spawn_food(&state.bounds);
        state.food[slot] = item;
        events.push(GameEvent::EraseFood { slot });
        events.push(GameEvent::DrawFood {
            slot,
            position: item.position,
            size: item.size,
        });

        debug!(
            "Food eaten in slot {}, score {} length {}",
            slot, state.score, state.length
        );
    }

    fn game_over(
        state: &mut GameState,
        cause: CollisionType,
        ate_food: bool,
        mut events: Vec<GameEvent>,
    ) -> StepResult {
        state.is_alive = false;
        info!(
            "Game over after {} ticks: {:?} at ({}, {}), score {}",
            state.ticks, cause, state.head.x, state.head.y, state.score
        );
        events.push(GameEvent::GameOver {
            score: state.score,
            cause,
        });

        StepResult {
            events,
            terminated: true,
            info: StepInfo {
                ate_food,
                collision_type: Some(cause),
            },
        }
    }

    /// New food item placed so it lies fully inside the canvas.
    ///
    /// Food larger than the canvas (rejected by `GameConfig::validate`) is
    /// pinned to the top left margin instead.
    fn spawn_food(&mut self, bounds: &CanvasBounds) -> FoodItem {
        let size = self.config.food_size();
        let max_x = (bounds.max_x - size).max(bounds.min_x);
        let max_y = (bounds.max_y - size).max(bounds.min_y);
        let x = self.rng.gen_range(bounds.min_x..=max_x);
        let y = self.rng.gen_range(bounds.min_y..=max_y);

        FoodItem {
            position: Position::new(x, y),
            size,
        }
    }
}
