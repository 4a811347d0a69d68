//! Component trait and dispatch contexts
//!
//! A component is a capability unit attached to exactly one game object.
//! The scene dispatches `update` then (after the physics pass) `draw` to
//! every component of every active object, in registration order.

use std::any::Any;

use crate::foundation::math::Mat4;
use crate::foundation::time::FrameTime;
use crate::input::InputState;
use crate::physics::PhysicsWorld;
use crate::render::{MaterialParams, RenderQueue};
use crate::scene::{Entity, Transform};

/// Capability unit attached to exactly one game object
///
/// Components are owned by their game object and never outlive it. The
/// attach/detach hooks run when the component enters or leaves the scene;
/// this is where a rigid body joins or leaves the physics registry.
pub trait Component: Any {
    /// Called once when the component is stored on its owner
    fn on_attach(&mut self, owner: Entity, transform: &Transform, physics: &mut PhysicsWorld) {
        let _ = (owner, transform, physics);
    }

    /// Called once when the component (or its owner) is removed
    fn on_detach(&mut self, owner: Entity, physics: &mut PhysicsWorld) {
        let _ = (owner, physics);
    }

    /// Per-step behavior, dispatched before the physics pass
    fn update(&mut self, transform: &mut Transform, ctx: &mut UpdateContext<'_>) {
        let _ = (transform, ctx);
    }

    /// Draw submission, dispatched after the physics pass
    fn draw(&self, transform: &Transform, ctx: &mut DrawContext<'_>) {
        let _ = (transform, ctx);
    }

    /// Concrete-type access for typed lookup
    fn as_any(&self) -> &dyn Any;

    /// Mutable concrete-type access for typed lookup
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Per-step data handed to every component's `update`
pub struct UpdateContext<'a> {
    /// Elapsed/total time for this step
    pub time: FrameTime,

    /// Key-state queries (the only input the core exposes)
    pub input: &'a InputState,
}

/// Per-object data handed to every component's `draw`
pub struct DrawContext<'a> {
    /// The owner's world matrix, finalized after integration
    pub world_matrix: Mat4,

    /// Snapshot of the owner's material parameter slots, if it has a material
    pub material: Option<MaterialParams>,

    /// Queue receiving draw submissions for this step
    pub queue: &'a mut RenderQueue,
}
