//! Math utilities and types
//!
//! Provides fundamental math types for 3D simulation and game development.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * self.scale.component_mul(&point)
    }

    /// Apply this transform to a direction vector (rotation and scale only)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * self.scale.component_mul(&vector)
    }

    /// Combine this transform with another (this acting as the parent)
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> Transform {
        let inv_scale = Vec3::new(1.0 / self.scale.x, 1.0 / self.scale.y, 1.0 / self.scale.z);
        let inv_rotation = self.rotation.inverse();
        let inv_position = inv_rotation * (-self.position.component_mul(&inv_scale));

        Transform {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }
}

/// Compute the rotation that aligns the local -Z axis with the direction
/// from `eye` toward `target`, keeping `up` roughly upward.
///
/// Y-up right-handed convention; degenerate eye/target pairs fall back to
/// the identity rotation.
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let offset = target - eye;
    if offset.magnitude_squared() < 1e-12 {
        return Quat::identity();
    }
    let forward = offset.normalize();
    let right = forward.cross(&up.normalize());
    if right.magnitude_squared() < 1e-12 {
        // Looking straight along the up axis; any roll is acceptable
        return Quat::rotation_between(&Vec3::new(0.0, 0.0, -1.0), &forward)
            .unwrap_or_else(Quat::identity);
    }
    let right = right.normalize();
    let camera_up = right.cross(&forward);

    // Column-major basis: right, up, -forward
    let rotation = Mat3::new(
        right.x, camera_up.x, -forward.x,
        right.y, camera_up.y, -forward.y,
        right.z, camera_up.z, -forward.z,
    );
    Quat::from_matrix(&rotation)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn identity_transform_leaves_points_alone() {
        let transform = Transform::identity();
        let point = Vec3::new(1.5, -2.0, 3.0);
        assert_relative_eq!(transform.transform_point(point), point, epsilon = EPSILON);
    }

    #[test]
    fn combine_applies_parent_then_child() {
        let parent = Transform::from_position_rotation(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::y_axis(), constants::HALF_PI),
        );
        let child = Transform::from_position(Vec3::new(0.0, 0.0, 1.0));

        let combined = parent.combine(&child);

        // Child position (0,0,1) rotated 90 degrees around Y, translated by (1,0,0)
        assert_relative_eq!(combined.position, Vec3::new(2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn inverse_cancels_transform() {
        let transform = Transform {
            position: Vec3::new(2.0, 3.0, 1.0),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), 0.785),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let identity = transform.combine(&transform.inverse());

        assert_relative_eq!(identity.position, Vec3::zeros(), epsilon = EPSILON);
        assert_relative_eq!(identity.scale, Vec3::new(1.0, 1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn look_at_rotation_faces_target() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let target = Vec3::zeros();

        let rotation = look_at_rotation(eye, target, Vec3::y());
        let forward = rotation * Vec3::new(0.0, 0.0, -1.0);

        assert_relative_eq!(forward, (target - eye).normalize(), epsilon = EPSILON);
    }

    #[test]
    fn matrix_matches_trs_composition() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), 0.5),
            scale: Vec3::new(2.0, 1.5, 0.8),
        };

        let point = Vec3::new(0.3, -0.7, 1.1);
        let via_matrix = transform.to_matrix().transform_point(&Point3::from(point));
        let via_transform = transform.transform_point(point);

        assert_relative_eq!(via_matrix.coords, via_transform, epsilon = EPSILON);
    }
}
