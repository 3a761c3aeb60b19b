use color_eyre::Result;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::entities::GameState;
use crate::input::{InputAction, InputManager};
use crate::renderer::{CELL_HEIGHT, CELL_WIDTH, GameRenderer, RenderView};
use crate::session::{GameEvent, Session};

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game_state: GameState,
    session: Session,
    /// Enemy contacts this session, surfaced in the HUD
    hits: u32,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        // Start with reasonable defaults, corrected against the real
        // terminal size on the first frame
        let session = Session::new(120.0 * CELL_WIDTH, 30.0 * CELL_HEIGHT);

        Self {
            running: true,
            game_state: GameState::Playing,
            session,
            hits: 0,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Calculate FPS
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            // A resized terminal resets the session to the new bounds
            let size = terminal.size()?;
            let world_width = f32::from(size.width) * CELL_WIDTH;
            let world_height = f32::from(size.height) * CELL_HEIGHT;
            if world_width != self.session.bounds.width
                || world_height != self.session.bounds.height
            {
                info!(
                    "terminal resized to {}x{}, resetting session",
                    size.width, size.height
                );
                self.session.resize(world_width, world_height);
                self.hits = 0;
            }

            // Render the frame
            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.game_state,
                    bounds: self.session.bounds,
                    player: &self.session.player,
                    enemies: &self.session.enemies,
                    projectiles: &self.session.projectiles,
                    hits: self.hits,
                    fps: self.fps,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and get actions
            self.input_manager.poll_events(&self.game_state)?;
            let actions = self.input_manager.actions();
            self.process_actions(&actions);

            // Update game state
            if self.game_state == GameState::Playing {
                let input = self.input_manager.held();
                for event in self.session.step(&input) {
                    match event {
                        GameEvent::PlayerHit => {
                            self.hits += 1;
                            debug!("player hit by enemy (total hits: {})", self.hits);
                        }
                    }
                }
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    /// Process input actions and update app state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Pause => {
                    self.game_state = GameState::Paused;
                }
                InputAction::Resume => {
                    self.game_state = GameState::Playing;
                }
                InputAction::Restart => {
                    info!("session restarted");
                    let bounds = self.session.bounds;
                    self.session.resize(bounds.width, bounds.height);
                    self.hits = 0;
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
