use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use super::notify::{BannerNotifier, GameOverNotice, Notifier};
use crate::game::{GameConfig, GameEngine, GameEvent, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{DisplayList, RenderSurface, Renderer};

/// Plays the game in the terminal with keyboard controls
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    display: DisplayList,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    notifier: BannerNotifier,
    tick_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let tick_interval = config.tick_rate.interval();
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset();

        let mut display = DisplayList::new();
        for event in engine.paint_events(&state) {
            display.apply(&event);
        }

        Self {
            engine,
            state,
            display,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            notifier: BannerNotifier::new(),
            tick_interval,
            should_quit: false,
        }
    }

    /// Run until the player quits or dismisses the game over banner.
    ///
    /// Returns the game over report, if the game ended by collision.
    pub async fn run(&mut self) -> Result<Option<GameOverNotice>> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        debug!("Terminal ready");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result.map(|()| self.notifier.notice().copied())
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        info!("Game started, ticking every {:?}", self.tick_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.is_alive {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.state,
                            &self.display,
                            &self.metrics,
                            self.notifier.notice(),
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if !self.state.is_alive {
            // Any key dismisses the game over banner
            self.should_quit = true;
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.engine.on_direction_input(&mut self.state, direction);
            }
            KeyAction::Quit => {
                info!("Player quit with score {}", self.state.score);
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.state);
        self.metrics.on_step(&result);

        for event in &result.events {
            match *event {
                GameEvent::GameOver { score, cause } => self.notifier.game_over(score, cause),
                _ => self.display.apply(event),
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        debug!("Terminal restored");
        Ok(())
    }
}
