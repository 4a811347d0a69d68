//! Rigid-body component: kinematic state and per-step motion integration

use std::any::Any;

use crate::config::PhysicsSettings;
use crate::foundation::math::{Quat, Vec3};
use crate::physics::PhysicsWorld;
use crate::scene::{Component, Entity, Transform};

/// Kinematic state for one game object
///
/// The body keeps a shadow copy of its position and hands the owning
/// [`Transform`] authority over it between steps: integration begins by
/// pulling the position from the transform and ends by pushing the
/// integrated position back. Other systems may therefore move the
/// transform freely between steps and the next integration will base
/// itself on what they wrote.
///
/// Acceleration is applied as a per-step velocity delta and velocity as a
/// per-step position delta. There is no step-duration scaling, so step
/// cadence sets the effective simulation speed.
pub struct RigidBody {
    mass: f32,
    max_acceleration: f32,
    friction: f32,
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    // Reserved for angular integration
    orientation: Quat,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a body at rest with mass 1, clamp bound 9.8 and no friction
    pub fn new() -> Self {
        Self {
            mass: 1.0,
            max_acceleration: 9.8,
            friction: 0.0,
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            orientation: Quat::identity(),
        }
    }

    /// Create a body using configured defaults
    pub fn from_settings(settings: &PhysicsSettings) -> Self {
        let mut body = Self::new();
        body.max_acceleration = settings.max_acceleration.abs();
        body.friction = settings.friction;
        body
    }

    /// Builder: set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: set the mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.set_mass(mass);
        self
    }

    /// Builder: set the friction coefficient
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Mass of the body
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Assign the mass; negative values are stored as their magnitude
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.abs();
    }

    /// Per-axis acceleration clamp bound
    pub fn max_acceleration(&self) -> f32 {
        self.max_acceleration
    }

    /// Assign the clamp bound, stored as a magnitude
    pub fn set_max_acceleration(&mut self, max_acceleration: f32) {
        self.max_acceleration = max_acceleration.abs();
    }

    /// Friction coefficient
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Assign the friction coefficient
    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    /// Shadow copy of the position as of the last sync
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Overwrite the shadow position
    ///
    /// The owning transform stays authoritative: the next step re-reads it
    /// before applying velocity, so position overrides meant to stick
    /// should be written to the transform.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Current velocity (units per step)
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Assign the velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Current accumulated acceleration (units per step per step)
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Assign the acceleration directly, bypassing mass scaling
    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    /// Reserved orientation state
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Apply a force, accumulating clamped acceleration
    ///
    /// A mass of exactly zero contributes a zero acceleration delta rather
    /// than a division fault. Each axis of the resulting acceleration
    /// saturates silently into `[-max_acceleration, +max_acceleration]`.
    pub fn add_force(&mut self, force: Vec3) {
        let inv_mass = if self.mass == 0.0 { 0.0 } else { 1.0 / self.mass };
        self.acceleration += force * inv_mass;

        let limit = self.max_acceleration;
        self.acceleration = Vec3::new(
            self.acceleration.x.clamp(-limit, limit),
            self.acceleration.y.clamp(-limit, limit),
            self.acceleration.z.clamp(-limit, limit),
        );
    }

    /// Velocity half of the step: friction force, then `velocity += acceleration`
    pub fn integrate_velocity(&mut self) {
        self.add_force(-self.acceleration * self.friction);
        self.velocity += self.acceleration;
    }

    /// Pull the authoritative position from the owning transform
    pub fn pull_position(&mut self, transform: &Transform) {
        self.position = transform.position();
    }

    /// Position half of the step: `position += velocity`
    pub fn integrate_position(&mut self) {
        self.position += self.velocity;
    }

    /// Push the integrated position back onto the owning transform
    pub fn push_position(&self, transform: &mut Transform) {
        transform.set_position(self.position);
    }

    /// One full integration step against the owning transform
    ///
    /// The order is fixed: velocity integration, authoritative position
    /// pull, position integration, position push.
    pub fn step(&mut self, transform: &mut Transform) {
        self.integrate_velocity();
        self.pull_position(transform);
        self.integrate_position();
        self.push_position(transform);
    }
}

impl Component for RigidBody {
    fn on_attach(&mut self, owner: Entity, transform: &Transform, physics: &mut PhysicsWorld) {
        physics.register(owner);
        self.position = transform.position();
    }

    fn on_detach(&mut self, owner: Entity, physics: &mut PhysicsWorld) {
        physics.unregister(owner);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
