//! Render boundary: draw queue and opaque resource handles
//!
//! The core never talks to a graphics backend. Draw dispatch fills a
//! [`RenderQueue`] with commands carrying finalized world matrices and
//! material parameter snapshots; an external presenter consumes the queue.
//! Meshes and textures are opaque handles minted by an external asset
//! loader.

pub mod material;
pub mod mesh_renderer;

pub use material::{Material, MaterialParam, MaterialParams};
pub use mesh_renderer::MeshRenderer;

use crate::foundation::math::Mat4;

/// Opaque handle to an externally loaded mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Opaque handle to an externally loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// One draw submission for the external presenter
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Mesh to draw
    pub mesh: MeshHandle,

    /// World matrix of the owning object, post-integration
    pub world_matrix: Mat4,

    /// Snapshot of the owner's material parameter slots, if any
    pub material: Option<MaterialParams>,
}

/// Per-step collection of draw commands in submission order
#[derive(Debug, Default)]
pub struct RenderQueue {
    commands: Vec<DrawCommand>,
}

impl RenderQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a draw command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate queued commands in submission order
    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Drop all queued commands (start of a new step)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Shared inputs the loop writes onto every active object's material
/// before update dispatch: the active camera's matrices and a global
/// texture, exactly once per step.
#[derive(Debug, Clone)]
pub struct SharedRenderInputs {
    /// Active camera view matrix
    pub view: Mat4,

    /// Active camera projection matrix
    pub projection: Mat4,

    /// Global texture bound into every material, if any
    pub texture: Option<TextureHandle>,
}

impl SharedRenderInputs {
    /// Material slot receiving the global texture
    pub const TEXTURE_SLOT: &'static str = "main_texture";
}

impl Default for SharedRenderInputs {
    fn default() -> Self {
        Self {
            view: Mat4::identity(),
            projection: Mat4::identity(),
            texture: None,
        }
    }
}
