//! # Sim Engine
//!
//! A component-based simulation core for small 3D games.
//!
//! ## Features
//!
//! - **Entity/Component Framework**: named game objects with attachable
//!   capability components, owned in contiguous scene storage
//! - **Rigid-Body Physics**: per-step force application and motion
//!   integration driven by a scene-owned registry
//! - **Collision Volumes**: sphere and box colliders with world-space
//!   queries and layer filtering
//! - **Narrow Boundaries**: rendering, windowing, and asset loading stay
//!   behind opaque handles and a draw queue
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sim_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let ball = engine.scene_mut().create_object("Ball");
//!         engine.scene_mut().add_component(ball, RigidBody::new());
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _time: FrameTime) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut game = MyGame;
//!     Engine::run(config, &mut game)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod physics;
pub mod render;
pub mod input;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppError, AppEvent, Application},
        config::{Config, EngineConfig, PhysicsSettings},
        engine::{Engine, EngineError},
        foundation::{
            math::{Mat4, Quat, Vec3},
            time::{FrameTime, Timer},
        },
        input::{InputState, KeyCode},
        physics::{
            BoxCollider, CollisionLayers, CollisionPair, PhysicsWorld, RigidBody, SphereCollider,
        },
        render::{Material, MeshHandle, MeshRenderer, RenderQueue, TextureHandle},
        scene::{Component, Entity, GameObject, Scene, Transform},
    };
}
