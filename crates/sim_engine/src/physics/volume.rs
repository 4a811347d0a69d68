//! World-space collision volumes and intersection queries
//!
//! Volumes are produced from collider components at query time; they are
//! temporaries for testing, never stored.

use crate::foundation::math::{Quat, Vec3};

/// A bounding sphere in world space
#[derive(Debug, Clone, Copy)]
pub struct BoundingSphere {
    /// Center position in world space
    pub center: Vec3,
    /// Sphere radius
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Get the penetration depth if intersecting (0.0 if not intersecting)
    pub fn penetration_depth(&self, other: &BoundingSphere) -> f32 {
        let distance = (self.center - other.center).magnitude();
        let radius_sum = self.radius + other.radius;
        if distance < radius_sum {
            radius_sum - distance
        } else {
            0.0
        }
    }

    /// Whether a point lies inside or on the sphere
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).magnitude_squared() <= self.radius * self.radius
    }
}

/// An oriented box in world space
#[derive(Debug, Clone, Copy)]
pub struct OrientedBox {
    /// Center position in world space
    pub center: Vec3,
    /// Half-extents along the box's local axes
    pub half_extents: Vec3,
    /// World-space orientation
    pub rotation: Quat,
}

impl OrientedBox {
    /// Creates an oriented box; half-extents are stored as magnitudes
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            rotation,
        }
    }

    /// The box's world-space axes
    fn axes(&self) -> [Vec3; 3] {
        let rotation = self.rotation.to_rotation_matrix();
        [
            rotation * Vec3::x(),
            rotation * Vec3::y(),
            rotation * Vec3::z(),
        ]
    }

    /// Closest point on or inside the box to a world-space point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let axes = self.axes();
        let extents = [self.half_extents.x, self.half_extents.y, self.half_extents.z];
        let offset = point - self.center;

        let mut closest = self.center;
        for (axis, extent) in axes.iter().zip(extents) {
            let distance = offset.dot(axis).clamp(-extent, extent);
            closest += axis * distance;
        }
        closest
    }

    /// Whether a point lies inside or on the box
    pub fn contains_point(&self, point: Vec3) -> bool {
        let axes = self.axes();
        let extents = [self.half_extents.x, self.half_extents.y, self.half_extents.z];
        let offset = point - self.center;

        axes.iter()
            .zip(extents)
            .all(|(axis, extent)| offset.dot(axis).abs() <= extent)
    }

    /// Radius of the tightest sphere around the box
    pub fn bounding_radius(&self) -> f32 {
        self.half_extents.magnitude()
    }

    /// Check if this box intersects a sphere
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let closest = self.closest_point(sphere.center);
        (closest - sphere.center).magnitude_squared() <= sphere.radius * sphere.radius
    }

    /// Check if this box intersects another via separating axes
    ///
    /// Tests the 6 face normals and 9 edge cross products; near-parallel
    /// edge pairs produce degenerate axes and are skipped.
    pub fn intersects_box(&self, other: &OrientedBox) -> bool {
        let axes_a = self.axes();
        let axes_b = other.axes();
        let offset = other.center - self.center;

        let mut candidates = Vec::with_capacity(15);
        candidates.extend_from_slice(&axes_a);
        candidates.extend_from_slice(&axes_b);
        for a in &axes_a {
            for b in &axes_b {
                candidates.push(a.cross(b));
            }
        }

        let extents_a = [self.half_extents.x, self.half_extents.y, self.half_extents.z];
        let extents_b = [
            other.half_extents.x,
            other.half_extents.y,
            other.half_extents.z,
        ];

        for axis in candidates {
            if axis.magnitude_squared() < 1e-8 {
                continue;
            }
            let reach_a: f32 = axes_a
                .iter()
                .zip(extents_a)
                .map(|(a, extent)| extent * a.dot(&axis).abs())
                .sum();
            let reach_b: f32 = axes_b
                .iter()
                .zip(extents_b)
                .map(|(b, extent)| extent * b.dot(&axis).abs())
                .sum();
            if offset.dot(&axis).abs() > reach_a + reach_b {
                return false;
            }
        }
        true
    }
}

/// World-space collision volume produced by a collider at query time
#[derive(Debug, Clone, Copy)]
pub enum WorldVolume {
    /// World-space sphere
    Sphere(BoundingSphere),
    /// World-space oriented box
    Box(OrientedBox),
}

impl WorldVolume {
    /// Get center position
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.center,
            Self::Box(oriented) => oriented.center,
        }
    }

    /// Get a bounding sphere enclosing the volume
    pub fn bounding_sphere(&self) -> BoundingSphere {
        match self {
            Self::Sphere(sphere) => *sphere,
            Self::Box(oriented) => BoundingSphere::new(oriented.center, oriented.bounding_radius()),
        }
    }

    /// Test if this volume intersects another
    pub fn intersects(&self, other: &WorldVolume) -> bool {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => a.intersects(b),
            (Self::Sphere(sphere), Self::Box(oriented))
            | (Self::Box(oriented), Self::Sphere(sphere)) => oriented.intersects_sphere(sphere),
            (Self::Box(a), Self::Box(b)) => a.intersects_box(b),
        }
    }
}
