//! Scene: the arena owning every game object and the physics world
//!
//! The scene is the single owner of simulation state. Game objects live in
//! contiguous slotmap storage and are addressed by [`Entity`] handles;
//! components reference their owner by handle, never by pointer, so no
//! ownership cycles exist anywhere in the core.

pub mod component;
pub mod entity;
pub mod game_object;
pub mod transform;

pub use component::{Component, DrawContext, UpdateContext};
pub use entity::{Entity, GameObjects};
pub use game_object::GameObject;
pub use transform::Transform;

use std::collections::HashMap;

use crate::foundation::math::{self, Mat4, Vec3};
use crate::foundation::time::FrameTime;
use crate::input::InputState;
use crate::physics::{BoxCollider, CollisionPair, PhysicsWorld, SphereCollider, WorldVolume};
use crate::render::{Material, RenderQueue, SharedRenderInputs};

/// Container and dispatcher for all game objects
///
/// One scene step is: `update` dispatch over active objects, then the
/// physics pass over registered bodies, then `draw` dispatch. Draw always
/// observes post-integration transforms.
pub struct Scene {
    objects: GameObjects,
    names: HashMap<String, Entity>,
    order: Vec<Entity>,
    physics: PhysicsWorld,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with its own physics world
    pub fn new() -> Self {
        Self {
            objects: GameObjects::with_key(),
            names: HashMap::new(),
            order: Vec::new(),
            physics: PhysicsWorld::new(),
        }
    }

    /// Create a game object, or return the existing one registered under
    /// `name`
    ///
    /// Creation is idempotent by name: requesting a name that already
    /// exists yields the same entity and does not duplicate it in the
    /// dispatch order. Always succeeds.
    pub fn create_object(&mut self, name: &str) -> Entity {
        if let Some(&existing) = self.names.get(name) {
            return existing;
        }

        let entity = self.objects.insert(GameObject::new(name));
        self.names.insert(name.to_owned(), entity);
        self.order.push(entity);
        log::debug!("created object '{name}'");
        entity
    }

    /// Look up an entity by name
    pub fn find_object(&self, name: &str) -> Option<Entity> {
        self.names.get(name).copied()
    }

    /// Borrow a game object
    pub fn object(&self, entity: Entity) -> Option<&GameObject> {
        self.objects.get(entity)
    }

    /// Mutably borrow a game object
    pub fn object_mut(&mut self, entity: Entity) -> Option<&mut GameObject> {
        self.objects.get_mut(entity)
    }

    /// Destroy a game object and everything it owns
    ///
    /// Every component's detach hook runs, which deregisters any rigid
    /// body from the physics world. Destroying an absent entity is a no-op.
    pub fn destroy_object(&mut self, entity: Entity) {
        let Some(mut object) = self.objects.remove(entity) else {
            return;
        };
        for mut component in object.drain_components() {
            component.on_detach(entity, &mut self.physics);
        }
        self.names.remove(object.name());
        self.order.retain(|&e| e != entity);
        log::debug!("destroyed object '{}'", object.name());
    }

    /// Attach a component to an entity and run its attach hook
    ///
    /// Returns a mutable handle to the stored component, or `None` when
    /// the entity does not exist.
    pub fn add_component<C: Component>(&mut self, entity: Entity, component: C) -> Option<&mut C> {
        let Some(object) = self.objects.get_mut(entity) else {
            log::warn!("add_component on missing entity {entity:?}");
            return None;
        };
        let index = object.insert_component(Box::new(component));
        let (transform, boxed) = object.transform_and_boxed_mut(index);
        boxed.on_attach(entity, transform, &mut self.physics);
        boxed.as_any_mut().downcast_mut::<C>()
    }

    /// Detach the first-registered component of kind `C` from an entity
    ///
    /// Runs the detach hook. Returns whether a component was removed.
    pub fn remove_component<C: Component>(&mut self, entity: Entity) -> bool {
        let Some(object) = self.objects.get_mut(entity) else {
            return false;
        };
        let Some(index) = object.kind_index(std::any::TypeId::of::<C>()) else {
            return false;
        };
        let mut component = object.take_component(index);
        component.on_detach(entity, &mut self.physics);
        true
    }

    /// Typed component lookup; `None` when entity or component is absent
    pub fn component<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.objects.get(entity)?.component::<C>()
    }

    /// Mutable typed component lookup
    pub fn component_mut<C: Component>(&mut self, entity: Entity) -> Option<&mut C> {
        self.objects.get_mut(entity)?.component_mut::<C>()
    }

    /// Entities in creation (dispatch) order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    /// Number of live game objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The scene-owned physics world
    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// Mutable access to the physics world
    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    /// World-space pose of an entity, composing the parent chain on demand
    ///
    /// A parent handle that no longer resolves is treated as a root.
    pub fn world_transform(&self, entity: Entity) -> Option<math::Transform> {
        let object = self.objects.get(entity)?;
        let mut pose = object.transform().local_transform();
        let mut parent = object.transform().parent();
        while let Some(ancestor) = parent {
            let Some(ancestor_object) = self.objects.get(ancestor) else {
                break;
            };
            pose = ancestor_object.transform().local_transform().combine(&pose);
            parent = ancestor_object.transform().parent();
        }
        Some(pose)
    }

    /// World matrix of an entity
    pub fn world_matrix(&self, entity: Entity) -> Option<Mat4> {
        self.world_transform(entity).map(|pose| pose.to_matrix())
    }

    /// World-space position of an entity
    pub fn world_position(&self, entity: Entity) -> Option<Vec3> {
        self.world_transform(entity).map(|pose| pose.position)
    }

    /// Write shared render inputs onto every active object's material
    ///
    /// Mirrors the per-frame texture/camera synchronization the loop
    /// performs before update dispatch; objects without a material are
    /// skipped.
    pub fn sync_render_inputs(&mut self, inputs: &SharedRenderInputs) {
        for index in 0..self.order.len() {
            let entity = self.order[index];
            let Some(object) = self.objects.get_mut(entity) else {
                continue;
            };
            if !object.is_active() {
                continue;
            }
            let Some(material) = object.component_mut::<Material>() else {
                continue;
            };
            if let Some(texture) = inputs.texture {
                material.set_texture(SharedRenderInputs::TEXTURE_SLOT, texture);
            }
            material.apply_camera(&inputs.view, &inputs.projection);
        }
    }

    /// Dispatch `update` to every component of every active object
    pub fn update(&mut self, time: FrameTime, input: &InputState) {
        let mut ctx = UpdateContext { time, input };
        for index in 0..self.order.len() {
            let entity = self.order[index];
            if let Some(object) = self.objects.get_mut(entity) {
                if object.is_active() {
                    object.update(&mut ctx);
                }
            }
        }
    }

    /// Run the physics pass over every registered rigid body
    pub fn step_physics(&mut self) {
        self.physics.step_all(&mut self.objects);
    }

    /// Dispatch `draw` to every component of every active object
    pub fn draw(&self, queue: &mut RenderQueue) {
        for &entity in &self.order {
            let Some(object) = self.objects.get(entity) else {
                continue;
            };
            if !object.is_active() {
                continue;
            }
            let world_matrix = self
                .world_transform(entity)
                .map_or_else(Mat4::identity, |pose| pose.to_matrix());
            let material = object.component::<Material>().map(|m| m.params().clone());
            let mut ctx = DrawContext {
                world_matrix,
                material,
                queue: &mut *queue,
            };
            object.draw(&mut ctx);
        }
    }

    /// Sweep collider-carrying objects for overlapping world volumes
    ///
    /// One volume per object (sphere collider preferred when both kinds
    /// are attached). Pairs are layer/mask filtered, rejected by bounding
    /// sphere, then tested exactly. Read-only: resolution is left to the
    /// caller.
    pub fn overlapping_pairs(&self) -> Vec<CollisionPair> {
        let mut volumes: Vec<(Entity, WorldVolume, u32, u32)> = Vec::new();
        for &entity in &self.order {
            let Some(object) = self.objects.get(entity) else {
                continue;
            };
            if !object.is_active() {
                continue;
            }
            let Some(pose) = self.world_transform(entity) else {
                continue;
            };
            if let Some(collider) = object.component::<SphereCollider>() {
                volumes.push((entity, collider.world_volume(&pose), collider.layer(), collider.mask()));
            } else if let Some(collider) = object.component::<BoxCollider>() {
                volumes.push((entity, collider.world_volume(&pose), collider.layer(), collider.mask()));
            }
        }

        let mut pairs = Vec::new();
        for i in 0..volumes.len() {
            for j in (i + 1)..volumes.len() {
                let (entity_a, volume_a, layer_a, mask_a) = &volumes[i];
                let (entity_b, volume_b, layer_b, mask_b) = &volumes[j];
                if (layer_a & mask_b) == 0 || (layer_b & mask_a) == 0 {
                    continue;
                }
                if !volume_a.bounding_sphere().intersects(&volume_b.bounding_sphere()) {
                    continue;
                }
                if volume_a.intersects(volume_b) {
                    pairs.push(CollisionPair {
                        first: *entity_a,
                        second: *entity_b,
                    });
                }
            }
        }
        pairs
    }
}
