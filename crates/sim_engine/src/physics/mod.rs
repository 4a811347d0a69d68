//! Physics module: rigid-body integration and collision volumes
//!
//! The simulation targets a handful of simultaneously active bodies with
//! simple primitive volumes. There is no broad-phase partitioning
//! structure, no constraint solver, and no continuous collision detection;
//! overlap pairs are reported for the caller to act on.

pub mod collider;
pub mod layers;
pub mod rigid_body;
pub mod volume;
pub mod world;

pub use collider::{BoxCollider, CollisionPair, SphereCollider};
pub use layers::CollisionLayers;
pub use rigid_body::RigidBody;
pub use volume::{BoundingSphere, OrientedBox, WorldVolume};
pub use world::PhysicsWorld;
