//! The renderer seam: what a frame submits and where it goes.

use crate::bounds::Overlay;
use crate::math::Mat4;
use crate::scene::Mesh;

/// Receives one frame's draw calls.
///
/// The viewer drives culling and ordering; implementations only turn the
/// calls into whatever their backend draws.
pub trait FrameSink {
    /// A frame starts with these camera matrices.
    fn begin_frame(&mut self, view: &Mat4, projection: &Mat4);

    /// Draw `mesh` under the object-to-world `transform`.
    fn draw_mesh(&mut self, mesh: &Mesh, transform: &Mat4);

    /// Draw a bounding volume overlay.
    fn draw_overlay(&mut self, overlay: &Overlay);
}

/// Per-frame submission counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Models whose volume passed the frustum test.
    pub drawn: usize,
    /// Models culled.
    pub culled: usize,
    /// Overlays submitted.
    pub overlays: usize,
}
