//! Game object: named container owning a transform and components

use std::any::TypeId;
use std::collections::HashMap;

use crate::scene::component::{Component, DrawContext, UpdateContext};
use crate::scene::Transform;

/// Named container owning a [`Transform`] and a set of components
///
/// Components are stored in registration order for dispatch. Typed lookup
/// goes through a kind index keyed by concrete type; when the same concrete
/// kind is attached twice, the first-registered component wins lookup
/// (matching scan order), while every copy still receives dispatch.
pub struct GameObject {
    name: String,
    active: bool,
    transform: Transform,
    components: Vec<Box<dyn Component>>,
    kinds: HashMap<TypeId, usize>,
}

impl GameObject {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            active: true,
            transform: Transform::default(),
            components: Vec::new(),
            kinds: HashMap::new(),
        }
    }

    /// Display name, unique within the owning scene
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether update/draw dispatch reaches this object
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable dispatch for this object
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The object's transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the object's transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// First-registered component of concrete kind `C`, if attached
    pub fn component<C: Component>(&self) -> Option<&C> {
        let &index = self.kinds.get(&TypeId::of::<C>())?;
        self.components[index].as_any().downcast_ref::<C>()
    }

    /// Mutable access to the first-registered component of kind `C`
    pub fn component_mut<C: Component>(&mut self) -> Option<&mut C> {
        let &index = self.kinds.get(&TypeId::of::<C>())?;
        self.components[index].as_any_mut().downcast_mut::<C>()
    }

    /// Whether a component of kind `C` is attached
    pub fn has_component<C: Component>(&self) -> bool {
        self.kinds.contains_key(&TypeId::of::<C>())
    }

    /// Split borrow of the transform together with a component of kind `C`
    ///
    /// This is the access path for operations that read and write both
    /// sides of the transform handshake, like the rigid-body step.
    pub fn transform_and_component_mut<C: Component>(
        &mut self,
    ) -> Option<(&mut Transform, &mut C)> {
        let &index = self.kinds.get(&TypeId::of::<C>())?;
        let component = self.components[index].as_any_mut().downcast_mut::<C>()?;
        Some((&mut self.transform, component))
    }

    /// Store a component, keeping the kind index first-wins
    pub(crate) fn insert_component(&mut self, component: Box<dyn Component>) -> usize {
        let type_id = component.as_any().type_id();
        let index = self.components.len();
        self.components.push(component);
        self.kinds.entry(type_id).or_insert(index);
        index
    }

    /// Borrow the transform alongside the boxed component at `index`
    pub(crate) fn transform_and_boxed_mut(
        &mut self,
        index: usize,
    ) -> (&Transform, &mut Box<dyn Component>) {
        (&self.transform, &mut self.components[index])
    }

    /// Index of the first-registered component of the given concrete kind
    pub(crate) fn kind_index(&self, type_id: TypeId) -> Option<usize> {
        self.kinds.get(&type_id).copied()
    }

    /// Remove and return the component at `index`, reindexing kinds
    pub(crate) fn take_component(&mut self, index: usize) -> Box<dyn Component> {
        let component = self.components.remove(index);
        self.kinds.clear();
        for (i, remaining) in self.components.iter().enumerate() {
            self.kinds.entry(remaining.as_any().type_id()).or_insert(i);
        }
        component
    }

    /// Remove every component for owner teardown
    pub(crate) fn drain_components(&mut self) -> Vec<Box<dyn Component>> {
        self.kinds.clear();
        std::mem::take(&mut self.components)
    }

    /// Forward `update` to every component in registration order
    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let Self {
            transform,
            components,
            ..
        } = self;
        for component in components.iter_mut() {
            component.update(transform, ctx);
        }
    }

    /// Forward `draw` to every component in registration order
    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>) {
        for component in &self.components {
            component.draw(&self.transform, ctx);
        }
    }
}
