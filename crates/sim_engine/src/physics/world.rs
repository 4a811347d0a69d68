//! Physics world: the registry driving per-step integration
//!
//! Owned by the scene and passed into component attach/detach hooks; there
//! is no global state. Membership tracks exactly the rigid bodies that are
//! currently constructed: a body joins on attach and leaves on detach.

use slotmap::SecondaryMap;

use crate::physics::RigidBody;
use crate::scene::{Entity, GameObjects};

/// Registry of entities carrying an active rigid body
pub struct PhysicsWorld {
    bodies: SecondaryMap<Entity, ()>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Create an empty physics world
    pub fn new() -> Self {
        Self {
            bodies: SecondaryMap::new(),
        }
    }

    /// Register a body's owner; registering a member again is a no-op
    pub fn register(&mut self, owner: Entity) {
        if self.bodies.insert(owner, ()).is_none() {
            log::debug!("registered rigid body for {owner:?}");
        }
    }

    /// Deregister a body's owner; unknown owners are ignored
    pub fn unregister(&mut self, owner: Entity) {
        if self.bodies.remove(owner).is_some() {
            log::debug!("unregistered rigid body for {owner:?}");
        }
    }

    /// Whether an owner is currently registered
    pub fn contains(&self, owner: Entity) -> bool {
        self.bodies.contains_key(owner)
    }

    /// Number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no bodies are registered
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Run one integration step for every registered body
    ///
    /// Iterates a snapshot of the membership, so deregistration during the
    /// pass is safe; owners whose object or body has meanwhile vanished
    /// are skipped. An empty registry is a no-op.
    pub fn step_all(&mut self, objects: &mut GameObjects) {
        let members: Vec<Entity> = self.bodies.keys().collect();
        for owner in members {
            let Some(object) = objects.get_mut(owner) else {
                continue;
            };
            let Some((transform, body)) = object.transform_and_component_mut::<RigidBody>() else {
                continue;
            };
            body.step(transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::Scene;

    #[test]
    fn membership_tracks_body_lifetime() {
        let mut scene = Scene::new();
        let a = scene.create_object("A");
        let b = scene.create_object("B");
        let c = scene.create_object("C");
        for entity in [a, b, c] {
            scene.add_component(entity, RigidBody::new());
        }
        assert_eq!(scene.physics().body_count(), 3);

        scene.destroy_object(b);
        assert_eq!(scene.physics().body_count(), 2);
        assert!(!scene.physics().contains(b));
    }

    #[test]
    fn double_register_and_absent_unregister_are_noops() {
        let mut world = PhysicsWorld::new();
        let mut scene = Scene::new();
        let entity = scene.create_object("Ball");

        world.register(entity);
        world.register(entity);
        assert_eq!(world.body_count(), 1);

        world.unregister(entity);
        world.unregister(entity);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn step_all_tolerates_empty_registry() {
        let mut scene = Scene::new();
        scene.step_physics();
        assert!(scene.physics().is_empty());
    }

    #[test]
    fn destroyed_body_is_not_stepped() {
        let mut scene = Scene::new();
        let kept = scene.create_object("Kept");
        let destroyed = scene.create_object("Destroyed");
        scene.add_component(kept, RigidBody::new().with_velocity(Vec3::new(1.0, 0.0, 0.0)));
        scene.add_component(
            destroyed,
            RigidBody::new().with_velocity(Vec3::new(1.0, 0.0, 0.0)),
        );

        scene.destroy_object(destroyed);
        scene.step_physics();

        let moved = scene.object(kept).unwrap().transform().position();
        assert_eq!(moved, Vec3::new(1.0, 0.0, 0.0));
        assert!(scene.object(destroyed).is_none());
    }

    #[test]
    fn external_override_is_visible_to_integration() {
        let mut scene = Scene::new();
        let ball = scene.create_object("Ball");
        scene.add_component(ball, RigidBody::new().with_velocity(Vec3::new(1.0, 0.0, 0.0)));

        // Game logic moves the transform directly before the physics pass
        scene
            .object_mut(ball)
            .unwrap()
            .transform_mut()
            .set_position(Vec3::new(10.0, 0.0, 0.0));
        scene.step_physics();

        let position = scene.object(ball).unwrap().transform().position();
        assert_eq!(position, Vec3::new(11.0, 0.0, 0.0));
    }
}
