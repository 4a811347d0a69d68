//! Core engine implementation

use thiserror::Error;

use crate::application::{AppEvent, Application};
use crate::config::{ConfigError, EngineConfig};
use crate::foundation::time::{FrameTime, Timer};
use crate::input::{InputState, KeyCode};
use crate::render::{RenderQueue, SharedRenderInputs};
use crate::scene::Scene;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Application error propagated out of the main loop
    #[error("Application error: {0}")]
    Application(String),
}

/// Main engine struct
///
/// Owns the scene, frame timing, input state and the draw queue, and runs
/// the synchronous main loop: application update, scene step, present,
/// end-of-step close check. Everything is single-threaded; one step runs
/// to completion before the next begins.
pub struct Engine {
    scene: Scene,
    input: InputState,
    render_inputs: SharedRenderInputs,
    queue: RenderQueue,
    timer: Timer,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        log::info!("initializing engine '{}'", config.title);
        Self {
            scene: Scene::new(),
            input: InputState::new(),
            render_inputs: SharedRenderInputs::default(),
            queue: RenderQueue::new(),
            timer: Timer::new(),
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    ///
    /// The loop ends when close is requested, escape is observed at the
    /// end of a step, or the application errors.
    pub fn run<A: Application>(config: EngineConfig, app: &mut A) -> Result<(), EngineError> {
        let mut engine = Self::new(config);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("initialize: {e}")))?;

        log::info!("starting main loop");
        let mut frames_this_second = 0u32;
        let mut second_accumulator = 0.0f32;

        while engine.running {
            engine.timer.update();
            let time = engine.timer.frame_time();

            // Game logic first: overrides written here reach this step's
            // integration
            app.update(&mut engine, time)
                .map_err(|e| EngineError::Application(format!("update: {e}")))?;

            engine.step(time);

            app.render(&engine.queue)
                .map_err(|e| EngineError::Application(format!("render: {e}")))?;

            frames_this_second += 1;
            second_accumulator += time.elapsed;
            if second_accumulator >= 1.0 {
                log::debug!(
                    "{}: {} fps (target {})",
                    engine.config.title,
                    frames_this_second,
                    engine.config.target_fps
                );
                frames_this_second = 0;
                second_accumulator -= 1.0;
            }

            // Close conditions are observed at the end of a step; there is
            // no partial-step cancellation
            if engine.input.is_pressed(KeyCode::Escape) {
                engine.running = false;
            }
        }

        app.cleanup(&mut engine);
        log::info!("engine shutdown complete");
        Ok(())
    }

    /// Advance the simulation by one step
    ///
    /// Order within a step: shared render inputs are written onto
    /// materials, update dispatch runs over active objects, the physics
    /// registry integrates every body, then draw dispatch fills a fresh
    /// queue. Draw therefore always observes post-integration transforms.
    pub fn step(&mut self, time: FrameTime) {
        self.scene.sync_render_inputs(&self.render_inputs);
        self.scene.update(time, &self.input);
        self.scene.step_physics();
        self.queue.clear();
        self.scene.draw(&mut self.queue);
    }

    /// Handle an event from the external driver
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CloseRequested => {
                self.running = false;
            }
            AppEvent::Key { key, pressed } => {
                self.input.set_key(key, pressed);
            }
        }
    }

    /// Ask the loop to stop after the current step
    pub fn request_close(&mut self) {
        self.running = false;
    }

    /// Whether the loop will keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The engine's scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Current input state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Shared render inputs written onto materials each step
    pub fn render_inputs(&self) -> &SharedRenderInputs {
        &self.render_inputs
    }

    /// Mutable access to the shared render inputs
    pub fn render_inputs_mut(&mut self) -> &mut SharedRenderInputs {
        &mut self.render_inputs
    }

    /// The draw queue as of the last step
    pub fn queue(&self) -> &RenderQueue {
        &self.queue
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::foundation::math::Vec3;
    use crate::physics::RigidBody;
    use crate::render::{Material, MeshHandle, MeshRenderer, TextureHandle};

    fn test_engine() -> Engine {
        Engine::new(EngineConfig::default())
    }

    struct CountdownApp {
        remaining: u32,
    }

    impl Application for CountdownApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _time: FrameTime) -> Result<(), AppError> {
            if self.remaining == 0 {
                engine.request_close();
            } else {
                self.remaining -= 1;
            }
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {}
    }

    #[test]
    fn run_stops_when_app_requests_close() {
        let mut app = CountdownApp { remaining: 3 };
        Engine::run(EngineConfig::default(), &mut app).expect("loop terminates cleanly");
    }

    struct EscapePresser;

    impl Application for EscapePresser {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _time: FrameTime) -> Result<(), AppError> {
            engine.handle_event(AppEvent::Key {
                key: KeyCode::Escape,
                pressed: true,
            });
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {}
    }

    #[test]
    fn escape_ends_the_loop_at_step_end() {
        let mut app = EscapePresser;
        Engine::run(EngineConfig::default(), &mut app).expect("escape observed at step end");
    }

    #[test]
    fn step_runs_update_physics_then_draw() {
        let mut engine = test_engine();
        let ball = engine.scene_mut().create_object("Ball");
        engine
            .scene_mut()
            .add_component(ball, RigidBody::new().with_velocity(Vec3::new(1.0, 0.0, 0.0)));
        engine
            .scene_mut()
            .add_component(ball, MeshRenderer::new().with_mesh(MeshHandle(1)));

        engine.step(FrameTime::default());

        // Draw observed the post-integration transform
        let command = engine.queue().iter().next().expect("one draw command");
        assert_eq!(command.world_matrix.m14, 1.0);
    }

    #[test]
    fn shared_inputs_reach_materials_before_update() {
        let mut engine = test_engine();
        let cube = engine.scene_mut().create_object("Cube");
        engine.scene_mut().add_component(cube, Material::new());
        engine.render_inputs_mut().texture = Some(TextureHandle(42));

        engine.step(FrameTime::default());

        let material = engine
            .scene()
            .component::<Material>(cube)
            .expect("material attached");
        assert!(material.param(SharedRenderInputs::TEXTURE_SLOT).is_some());
        assert!(material.param(Material::VIEW_SLOT).is_some());
    }

    #[test]
    fn close_request_stops_the_loop_flag() {
        let mut engine = test_engine();
        assert!(engine.is_running());

        engine.handle_event(AppEvent::CloseRequested);
        assert!(!engine.is_running());
    }

    #[test]
    fn key_events_feed_input_state() {
        let mut engine = test_engine();
        engine.handle_event(AppEvent::Key {
            key: KeyCode::Space,
            pressed: true,
        });
        assert!(engine.input().is_pressed(KeyCode::Space));
    }

    #[test]
    fn queue_is_rebuilt_every_step() {
        let mut engine = test_engine();
        let cube = engine.scene_mut().create_object("Cube");
        engine
            .scene_mut()
            .add_component(cube, MeshRenderer::new().with_mesh(MeshHandle(1)));

        engine.step(FrameTime::default());
        engine.step(FrameTime::default());
        assert_eq!(engine.queue().len(), 1);
    }
}
