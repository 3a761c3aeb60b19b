use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Enemy, GameState, Player, Projectile};
use crate::geometry::{BoundingBox, Rect as WorldRect};
use crate::session::WorldBounds;

/// Horizontal world units covered by one terminal column.
pub const CELL_WIDTH: f32 = 10.0;
/// Vertical world units covered by one terminal row. Terminal cells are
/// roughly twice as tall as they are wide, so the vertical scale doubles.
pub const CELL_HEIGHT: f32 = 20.0;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub bounds: WorldBounds,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub hits: u32,
    pub fps: u32,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::Playing => self.render_game(frame, view),
            GameState::Paused => self.render_paused(frame, view),
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Full-screen clear to the background color
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::DarkGray)),
            area,
        );

        // Ground line
        let ground_row = (view.bounds.ground_y() / CELL_HEIGHT).round() as u16;
        if ground_row < area.height {
            let ground_area = Rect {
                x: area.x,
                y: area.y + ground_row,
                width: area.width,
                height: 1,
            };
            frame.render_widget(
                Block::default().style(Style::default().bg(Color::Gray)),
                ground_area,
            );
        }

        // Player
        if let Some(rect) = cell_rect(view.player.bounds(), area) {
            frame.render_widget(
                Block::default().style(Style::default().bg(Color::Blue)),
                rect,
            );
        }

        // Enemies
        for enemy in view.enemies {
            if let Some(rect) = cell_rect(enemy.bounds(), area) {
                frame.render_widget(
                    Block::default().style(Style::default().bg(Color::Green)),
                    rect,
                );
            }
        }

        // Projectiles
        for projectile in view.projectiles {
            if let Some(rect) = cell_rect(projectile.bounds(), area) {
                frame.render_widget(
                    Block::default().style(Style::default().bg(Color::Yellow)),
                    rect,
                );
            }
        }

        // Stats overlay at the top
        let stats = Line::from(vec![
            Span::styled("Hits: ", Style::default().fg(Color::Black)),
            Span::styled(
                format!("{}", view.hits),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enemies: ", Style::default().fg(Color::Black)),
            Span::styled(
                format!("{}", view.enemies.len()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::Black)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(stats), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Jump] [X: Shoot] [P: Pause] [R: Restart] [Q: Quit]",
            Style::default().fg(Color::Black),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause screen with overlay
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        // First render the game screen
        self.render_game(frame, view);

        let area = view.area;
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = Rect {
            x: area.width / 2 - 15,
            y: area.height / 2 - 3,
            width: 30,
            height: 6,
        };

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }
}

/// Maps a world-unit box to a clipped terminal-cell rectangle. Entities
/// thinner than one cell still get a visible 1x1 block. Returns None when
/// the box lies entirely outside the drawable area.
fn cell_rect(world: WorldRect, area: Rect) -> Option<Rect> {
    let x0 = (world.x / CELL_WIDTH).round() as i32;
    let y0 = (world.y / CELL_HEIGHT).round() as i32;
    let w = ((world.width / CELL_WIDTH).round() as i32).max(1);
    let h = ((world.height / CELL_HEIGHT).round() as i32).max(1);

    let x1 = (x0 + w).min(area.width as i32);
    let y1 = (y0 + h).min(area.height as i32);
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some(Rect {
        x: area.x + x0 as u16,
        y: area.y + y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}
