//! Collision layer constants for filtering overlap queries
//!
//! Two colliders are considered only when each one's layer intersects the
//! other's mask.

/// Collision layer bit definitions
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Default layer for ordinary scene objects
    pub const DEFAULT: u32 = 1 << 0;

    /// Static environment geometry
    pub const ENVIRONMENT: u32 = 1 << 1;

    /// Moving simulation bodies
    pub const DYNAMIC: u32 = 1 << 2;

    /// Trigger volumes (report overlap, no physical meaning)
    pub const TRIGGER: u32 = 1 << 3;
}
