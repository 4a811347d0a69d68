//! Collider components: geometric volumes attached to game objects
//!
//! Colliders are pure geometry descriptors. They hold no kinematic state,
//! never mutate a rigid body, and produce world-space volumes from the
//! owner's transform only at query time.

use std::any::Any;

use crate::foundation::math::{self, Vec3};
use crate::physics::layers::CollisionLayers;
use crate::physics::volume::{BoundingSphere, OrientedBox, WorldVolume};
use crate::scene::{Component, Entity};

/// A pair of entities whose collider volumes overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    /// First entity of the pair (scene dispatch order)
    pub first: Entity,
    /// Second entity of the pair
    pub second: Entity,
}

/// Spherical collision volume: local center offset plus radius
pub struct SphereCollider {
    center: Vec3,
    radius: f32,
    layer: u32,
    mask: u32,
}

impl SphereCollider {
    /// Create a sphere collider centered on the owner
    pub fn new(radius: f32) -> Self {
        Self {
            center: Vec3::zeros(),
            radius: radius.abs(),
            layer: CollisionLayers::ALL,
            mask: CollisionLayers::ALL,
        }
    }

    /// Builder: offset the sphere from the owner's origin
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Builder: restrict which layers this collider is on and can meet
    pub fn with_layers(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Local-space center offset
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Collision layer bits
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Collision mask bits
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// World-space volume under the owner's current pose
    ///
    /// The radius scales by the largest scale component so the sphere
    /// stays a sphere under non-uniform scale.
    pub fn world_volume(&self, pose: &math::Transform) -> WorldVolume {
        let center = pose.transform_point(self.center);
        let scale = pose.scale.abs();
        let max_scale = scale.x.max(scale.y).max(scale.z);
        WorldVolume::Sphere(BoundingSphere::new(center, self.radius * max_scale))
    }
}

impl Component for SphereCollider {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Box collision volume: local center offset plus half-extents
pub struct BoxCollider {
    center: Vec3,
    half_extents: Vec3,
    layer: u32,
    mask: u32,
}

impl BoxCollider {
    /// Create a box collider centered on the owner
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            center: Vec3::zeros(),
            half_extents: half_extents.abs(),
            layer: CollisionLayers::ALL,
            mask: CollisionLayers::ALL,
        }
    }

    /// Builder: offset the box from the owner's origin
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Builder: restrict which layers this collider is on and can meet
    pub fn with_layers(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Local-space center offset
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Local-space half-extents
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Collision layer bits
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Collision mask bits
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// World-space volume under the owner's current pose
    pub fn world_volume(&self, pose: &math::Transform) -> WorldVolume {
        let center = pose.transform_point(self.center);
        let half_extents = self.half_extents.component_mul(&pose.scale);
        WorldVolume::Box(OrientedBox::new(center, half_extents, pose.rotation))
    }
}

impl Component for BoxCollider {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::foundation::math::Quat;
    use crate::scene::Scene;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_volume_follows_owner_pose() {
        let collider = SphereCollider::new(0.5).with_center(Vec3::new(1.0, 0.0, 0.0));
        let pose = math::Transform {
            position: Vec3::new(0.0, 2.0, 0.0),
            rotation: Quat::identity(),
            scale: Vec3::new(3.0, 1.0, 1.0),
        };

        let WorldVolume::Sphere(sphere) = collider.world_volume(&pose) else {
            panic!("sphere collider must produce a sphere volume");
        };
        // Offset scaled along X, radius scaled by the largest component
        assert_relative_eq!(sphere.center, Vec3::new(3.0, 2.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(sphere.radius, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn box_volume_carries_rotation_and_scale() {
        let collider = BoxCollider::new(Vec3::new(1.0, 2.0, 3.0));
        let pose = math::Transform {
            position: Vec3::new(5.0, 0.0, 0.0),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), HALF_PI),
            scale: Vec3::new(2.0, 1.0, 1.0),
        };

        let WorldVolume::Box(oriented) = collider.world_volume(&pose) else {
            panic!("box collider must produce a box volume");
        };
        assert_relative_eq!(oriented.center, Vec3::new(5.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(oriented.half_extents, Vec3::new(2.0, 2.0, 3.0), epsilon = 1e-6);
        // Local +X now points along world -Z
        let x_axis = oriented.rotation * Vec3::x();
        assert_relative_eq!(x_axis, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn overlap_sweep_reports_touching_pair() {
        let mut scene = Scene::new();
        let a = scene.create_object("A");
        let b = scene.create_object("B");
        let c = scene.create_object("C");

        scene.add_component(a, SphereCollider::new(1.0));
        scene.add_component(b, SphereCollider::new(1.0));
        scene.add_component(c, SphereCollider::new(1.0));
        scene
            .object_mut(b)
            .unwrap()
            .transform_mut()
            .set_position(Vec3::new(1.5, 0.0, 0.0));
        scene
            .object_mut(c)
            .unwrap()
            .transform_mut()
            .set_position(Vec3::new(10.0, 0.0, 0.0));

        let pairs = scene.overlapping_pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0], CollisionPair { first: a, second: b });
    }

    #[test]
    fn layer_mask_filters_pairs() {
        let mut scene = Scene::new();
        let a = scene.create_object("A");
        let b = scene.create_object("B");

        scene.add_component(
            a,
            SphereCollider::new(1.0)
                .with_layers(CollisionLayers::DYNAMIC, CollisionLayers::ENVIRONMENT),
        );
        scene.add_component(
            b,
            SphereCollider::new(1.0)
                .with_layers(CollisionLayers::DYNAMIC, CollisionLayers::ENVIRONMENT),
        );

        // Overlapping, but each body masks only the environment layer
        assert!(scene.overlapping_pairs().is_empty());
    }

    #[test]
    fn sphere_meets_box_in_sweep() {
        let mut scene = Scene::new();
        let table = scene.create_object("Table");
        let ball = scene.create_object("Ball");

        scene.add_component(table, BoxCollider::new(Vec3::new(2.0, 0.5, 2.0)));
        scene.add_component(ball, SphereCollider::new(0.5));
        scene
            .object_mut(ball)
            .unwrap()
            .transform_mut()
            .set_position(Vec3::new(0.0, 0.9, 0.0));

        assert_eq!(scene.overlapping_pairs().len(), 1);
    }
}
