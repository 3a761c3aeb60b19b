/// App-shell state. The simulation itself knows nothing about pausing;
/// a paused app simply stops calling the session's step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
}
