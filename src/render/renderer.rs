use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas, Circle, Rectangle},
    },
};

use super::surface::DisplayList;
use crate::game::{CanvasBounds, CollisionType, GameState, SnakeColor};
use crate::metrics::GameMetrics;
use crate::modes::GameOverNotice;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        display: &DisplayList,
        metrics: &GameMetrics,
        notice: Option<&GameOverNotice>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        match notice {
            None => frame.render_widget(self.render_canvas(state.bounds, display), chunks[1]),
            Some(notice) => frame.render_widget(self.render_game_over(notice), chunks[1]),
        }

        let controls = self.render_controls(notice.is_some());
        frame.render_widget(controls, chunks[2]);
    }

    fn render_canvas<'a>(
        &self,
        bounds: CanvasBounds,
        display: &'a DisplayList,
    ) -> Canvas<'a, impl Fn(&mut ratatui::widgets::canvas::Context) + 'a> {
        // Leave the same margin on the far side as on the near side
        let width = f64::from(bounds.max_x + bounds.min_x);
        let height = f64::from(bounds.max_y + bounds.min_y);
        // Canvas y grows upwards, the game's grows downwards
        let flip = move |y: i32, size: i32| height - f64::from(y) - f64::from(size);

        Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                ctx.draw(&Rectangle {
                    x: f64::from(bounds.min_x),
                    y: f64::from(bounds.min_y),
                    width: f64::from(bounds.max_x - bounds.min_x),
                    height: f64::from(bounds.max_y - bounds.min_y),
                    color: Color::DarkGray,
                });

                for food in display.food() {
                    let radius = f64::from(food.size) / 2.0;
                    ctx.draw(&Circle {
                        x: f64::from(food.position.x) + radius,
                        y: flip(food.position.y, food.size) + radius,
                        radius,
                        color: Color::Red,
                    });
                }

                for (segment, color) in display.segments() {
                    ctx.draw(&Rectangle {
                        x: f64::from(segment.position.x),
                        y: flip(segment.position.y, segment.size),
                        width: f64::from(segment.size),
                        height: f64::from(segment.size),
                        color: terminal_color(color),
                    });
                }
            })
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.length.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.food_eaten.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, notice: &GameOverNotice) -> Paragraph<'_> {
        let cause = match notice.cause {
            CollisionType::Wall => "You hit the wall",
            CollisionType::SelfCollision => "You bit yourself",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("You Lose! Your score is ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    notice.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to exit",
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, finished: bool) -> Paragraph<'_> {
        let text = if finished {
            Line::from(Span::styled("any key", Style::default().fg(Color::Cyan)))
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn terminal_color(color: SnakeColor) -> Color {
    match color {
        SnakeColor::Green => Color::Green,
        SnakeColor::Cyan => Color::Cyan,
        SnakeColor::Blue => Color::Blue,
        SnakeColor::Yellow => Color::Yellow,
        SnakeColor::Magenta => Color::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use crate::render::RenderSurface;
    use ratatui::{Terminal, backend::TestBackend};

    fn painted() -> (GameState, DisplayList) {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 5);
        let state = engine.reset();
        let mut display = DisplayList::new();
        for event in engine.paint_events(&state) {
            display.apply(&event);
        }
        (state, display)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_canvas() {
        let (state, display) = painted();
        let metrics = GameMetrics::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| Renderer::new().render(frame, &state, &display, &metrics, None))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Length: 100"));
        assert!(text.contains("Snake"));
    }

    #[test]
    fn test_renders_game_over_notice() {
        let (state, display) = painted();
        let metrics = GameMetrics::new();
        let notice = GameOverNotice {
            score: 40,
            cause: CollisionType::Wall,
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &state, &display, &metrics, Some(&notice))
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You Lose! Your score is 40"));
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(terminal_color(SnakeColor::Green), Color::Green);
        assert_eq!(terminal_color(SnakeColor::Magenta), Color::Magenta);
    }
}
