//! Application trait and lifecycle management

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::Engine;
use crate::foundation::time::FrameTime;
use crate::input::KeyCode;
use crate::render::RenderQueue;

/// Application lifecycle trait
///
/// Implement this trait to drive the engine with your game. Update runs
/// before the scene step, so kinematic overrides written here are visible
/// to the same step's integration.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the main loop. Build your initial scene here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Per-step game logic, called before the scene step
    fn update(&mut self, engine: &mut Engine, time: FrameTime) -> Result<(), AppError>;

    /// Present the step's draw queue
    ///
    /// Called after the scene step with the finalized queue. The default
    /// implementation discards it, which suits headless runs.
    fn render(&mut self, queue: &RenderQueue) -> Result<(), AppError> {
        let _ = queue;
        Ok(())
    }

    /// Cleanup when the loop has ended
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// Events fed to the engine by the external driver
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// The external window or host asked the loop to stop
    CloseRequested,

    /// A key transitioned
    Key {
        /// The key that changed
        key: KeyCode,
        /// Whether it is now pressed
        pressed: bool,
    },
}
