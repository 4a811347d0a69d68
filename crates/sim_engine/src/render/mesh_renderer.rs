//! Mesh renderer component: submits its owner to the draw queue

use std::any::Any;

use crate::render::{DrawCommand, MeshHandle};
use crate::scene::{Component, DrawContext, Transform};

/// Draw-submission component holding an opaque mesh handle
///
/// An unset mesh simply skips submission; the object still participates in
/// everything else.
#[derive(Debug, Default)]
pub struct MeshRenderer {
    mesh: Option<MeshHandle>,
}

impl MeshRenderer {
    /// Create a renderer with no mesh assigned
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: assign the mesh up front
    pub fn with_mesh(mut self, mesh: MeshHandle) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Assign the mesh to draw
    pub fn set_mesh(&mut self, mesh: MeshHandle) {
        self.mesh = Some(mesh);
    }

    /// Currently assigned mesh
    pub fn mesh(&self) -> Option<MeshHandle> {
        self.mesh
    }
}

impl Component for MeshRenderer {
    fn draw(&self, _transform: &Transform, ctx: &mut DrawContext<'_>) {
        let Some(mesh) = self.mesh else {
            return;
        };
        ctx.queue.push(DrawCommand {
            mesh,
            world_matrix: ctx.world_matrix,
            material: ctx.material.clone(),
        });
    }

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
    use crate::foundation::math::Vec3;
    use crate::render::{Material, RenderQueue};
    use crate::scene::Scene;

    #[test]
    fn draw_submits_post_integration_pose() {
        let mut scene = Scene::new();
        let entity = scene.create_object("Cube");
        scene.add_component(entity, MeshRenderer::new().with_mesh(MeshHandle(7)));
        scene
            .object_mut(entity)
            .unwrap()
            .transform_mut()
            .set_position(Vec3::new(1.0, 2.0, 3.0));

        let mut queue = RenderQueue::new();
        scene.draw(&mut queue);

        assert_eq!(queue.len(), 1);
        let command = queue.iter().next().unwrap();
        assert_eq!(command.mesh, MeshHandle(7));
        assert_eq!(command.world_matrix.m14, 1.0);
        assert_eq!(command.world_matrix.m24, 2.0);
        assert_eq!(command.world_matrix.m34, 3.0);
    }

    #[test]
    fn unset_mesh_submits_nothing() {
        let mut scene = Scene::new();
        let entity = scene.create_object("Empty");
        scene.add_component(entity, MeshRenderer::new());

        let mut queue = RenderQueue::new();
        scene.draw(&mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn command_carries_material_snapshot() {
        let mut scene = Scene::new();
        let entity = scene.create_object("Sphere");
        scene.add_component(entity, Material::new().with_color(1.0, 0.0, 0.0, 1.0));
        scene.add_component(entity, MeshRenderer::new().with_mesh(MeshHandle(3)));

        let mut queue = RenderQueue::new();
        scene.draw(&mut queue);

        let command = queue.iter().next().unwrap();
        let params = command.material.as_ref().expect("material snapshot");
        assert!(params.contains_key("color"));
    }
}
