//! Transform component
//!
//! Local position/orientation/scale plus an optional parent link. World
//! pose is derived on demand by the scene composing the parent chain; all
//! mutation here is local-space storage.

use crate::foundation::math::{self, look_at_rotation, Mat4, Quat, Vec3};
use crate::scene::Entity;

/// Spatial placement of a game object
///
/// The parent link is a non-owning back-reference; a child never owns its
/// parent, so no ownership cycles can form. Parent chains are expected to
/// be acyclic; the scene does not validate this.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    parent: Option<Entity>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            parent: None,
        }
    }
}

impl Transform {
    /// Create an identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform at a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the local position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Local rotation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Set the local rotation
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Orient toward a target point (Y-up), keeping position unchanged
    pub fn look_at(&mut self, target: Vec3) {
        self.rotation = look_at_rotation(self.position, target, Vec3::y());
    }

    /// Local scale
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the local scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Parent entity, if any
    pub fn parent(&self) -> Option<Entity> {
        self.parent
    }

    /// Set or clear the parent link
    pub fn set_parent(&mut self, parent: Option<Entity>) {
        self.parent = parent;
    }

    /// Local pose as a math transform value
    pub fn local_transform(&self) -> math::Transform {
        math::Transform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Local pose as a TRS matrix
    pub fn local_matrix(&self) -> Mat4 {
        self.local_transform().to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mutators_are_pure_storage() {
        let mut transform = Transform::new();
        transform.set_position(Vec3::new(1.0, 2.0, 3.0));
        transform.set_scale(Vec3::new(2.0, 2.0, 2.0));

        assert_eq!(transform.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.scale(), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(transform.parent(), None);
    }

    #[test]
    fn look_at_derives_orientation_from_target() {
        let mut transform = Transform::from_position(Vec3::new(5.0, 0.0, 0.0));
        transform.look_at(Vec3::zeros());

        let forward = transform.rotation() * Vec3::new(0.0, 0.0, -1.0);
        assert_relative_eq!(forward, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);
        // Position untouched by orientation changes
        assert_eq!(transform.position(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn local_matrix_reflects_latest_mutation() {
        let mut transform = Transform::new();
        transform.set_position(Vec3::new(0.0, 3.0, 0.0));

        let translated = transform.local_matrix().transform_point(&nalgebra::Point3::origin());
        assert_relative_eq!(translated.coords, Vec3::new(0.0, 3.0, 0.0), epsilon = 1e-6);
    }
}
