//! Entity handles
//!
//! Entities are generational keys into the scene's object arena. A key
//! stays cheap to copy and compare, and survives slot reuse safely: a key
//! whose object was destroyed simply stops resolving.

use crate::scene::GameObject;

slotmap::new_key_type! {
    /// Stable handle to a game object owned by a [`Scene`](crate::scene::Scene)
    pub struct Entity;
}

/// Arena storage for game objects
pub type GameObjects = slotmap::SlotMap<Entity, GameObject>;
