//! Material component: named parameter slots for the external renderer

use std::any::Any;
use std::collections::HashMap;

use crate::foundation::math::{Mat4, Vec4};
use crate::render::TextureHandle;
use crate::scene::Component;

/// Value stored in a material parameter slot
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialParam {
    /// Scalar parameter
    Scalar(f32),
    /// Four-component vector parameter (colors, factors)
    Vector(Vec4),
    /// Matrix parameter (camera and object matrices)
    Matrix(Mat4),
    /// Texture binding
    Texture(TextureHandle),
}

/// Named parameter slots, snapshotted into draw commands
pub type MaterialParams = HashMap<String, MaterialParam>;

/// Surface description exposed to the external renderer
///
/// The core treats a material as a bag of named slots. The renderer (and
/// the loop's shared-input sync) write camera matrices and textures into
/// it before each object draws.
#[derive(Debug, Clone, Default)]
pub struct Material {
    params: MaterialParams,
}

impl Material {
    /// Slot receiving the active camera's view matrix
    pub const VIEW_SLOT: &'static str = "view";

    /// Slot receiving the active camera's projection matrix
    pub const PROJECTION_SLOT: &'static str = "projection";

    /// Create a material with no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: preset a color vector under the conventional "color" slot
    pub fn with_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.set_vector("color", Vec4::new(r, g, b, a));
        self
    }

    /// Set a scalar slot
    pub fn set_scalar(&mut self, name: &str, value: f32) {
        self.params.insert(name.to_owned(), MaterialParam::Scalar(value));
    }

    /// Set a vector slot
    pub fn set_vector(&mut self, name: &str, value: Vec4) {
        self.params.insert(name.to_owned(), MaterialParam::Vector(value));
    }

    /// Set a matrix slot
    pub fn set_matrix(&mut self, name: &str, value: Mat4) {
        self.params.insert(name.to_owned(), MaterialParam::Matrix(value));
    }

    /// Bind a texture into a slot
    pub fn set_texture(&mut self, name: &str, texture: TextureHandle) {
        self.params
            .insert(name.to_owned(), MaterialParam::Texture(texture));
    }

    /// Write the active camera's matrices into their conventional slots
    pub fn apply_camera(&mut self, view: &Mat4, projection: &Mat4) {
        self.set_matrix(Self::VIEW_SLOT, *view);
        self.set_matrix(Self::PROJECTION_SLOT, *projection);
    }

    /// Read a slot; absent slots are `None`
    pub fn param(&self, name: &str) -> Option<&MaterialParam> {
        self.params.get(name)
    }

    /// All slots, for snapshotting into draw commands
    pub fn params(&self) -> &MaterialParams {
        &self.params
    }
}

impl Component for Material {
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

    #[test]
    fn slots_hold_latest_value() {
        let mut material = Material::new();
        material.set_scalar("roughness", 0.3);
        material.set_scalar("roughness", 0.7);

        assert_eq!(material.param("roughness"), Some(&MaterialParam::Scalar(0.7)));
        assert_eq!(material.param("metallic"), None);
    }

    #[test]
    fn apply_camera_fills_conventional_slots() {
        let mut material = Material::new();
        material.apply_camera(&Mat4::identity(), &Mat4::identity());

        assert!(material.param(Material::VIEW_SLOT).is_some());
        assert!(material.param(Material::PROJECTION_SLOT).is_some());
    }

    #[test]
    fn texture_binding_replaces_previous() {
        let mut material = Material::new();
        material.set_texture("main_texture", TextureHandle(1));
        material.set_texture("main_texture", TextureHandle(2));

        assert_eq!(
            material.param("main_texture"),
            Some(&MaterialParam::Texture(TextureHandle(2)))
        );
    }
}
