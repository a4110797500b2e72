use super::mesh::Mesh;
use crate::bounds::{BoundingVolume, Overlay, VolumeKind};
use crate::math::{Mat4, Point3, Vec3};
use crate::options::AnimationOptions;
use crate::picking::Ray;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A mesh placed in the scene, spinning about its vertical axis and
/// bobbing up and down, with a bounding volume that follows it.
#[derive(Debug)]
pub struct Model {
    id: u32,
    mesh: Mesh,
    position: Point3,
    start_y: f32,
    rotation: f32,
    rotation_speed: f32,
    bob_speed: f32,
    bob_amplitude: f32,
    phase_degrees: f32,
    scale: f32,
    volume: Box<dyn BoundingVolume>,
    draw_volume: bool,
}

impl Model {
    /// Place `mesh` at `position`.
    ///
    /// The mesh is scaled uniformly so its bounding radius matches the
    /// animation's target radius. `phase_degrees` offsets both the spin and
    /// the bob so models loaded together do not move in lockstep.
    #[must_use]
    pub fn new(
        id: u32,
        mesh: Mesh,
        position: Point3,
        kind: VolumeKind,
        animation: &AnimationOptions,
        phase_degrees: f32,
    ) -> Self {
        let scale = animation.target_radius / mesh.radius();
        Self {
            id,
            mesh,
            position,
            start_y: position.y,
            rotation: phase_degrees,
            rotation_speed: animation.rotation_speed,
            bob_speed: animation.bob_speed,
            bob_amplitude: animation.bob_amplitude,
            phase_degrees,
            scale,
            volume: kind.create(),
            draw_volume: false,
        }
    }

    /// Scene-assigned identifier.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The model's geometry.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Current world-space position of the mesh's object-space origin.
    ///
    /// The transform pivots on that origin, so this equals the world
    /// centroid only for meshes centered on the origin.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Current spin about +Y, in degrees.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Uniform scale applied to the mesh.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Bounding radius after scaling.
    #[must_use]
    pub fn scaled_radius(&self) -> f32 {
        self.scale * self.mesh.radius()
    }

    /// Random phase chosen at load time, in degrees.
    #[must_use]
    pub fn phase_degrees(&self) -> f32 {
        self.phase_degrees
    }

    /// Advance the animation to `elapsed` seconds since start.
    pub fn update(&mut self, elapsed: f32) {
        self.rotation = self.phase_degrees + elapsed * self.rotation_speed;
        let phase = self.phase_degrees.to_radians();
        self.position.y = self.start_y
            + self.bob_amplitude * (self.bob_speed * (elapsed + phase)).sin();
    }

    /// Object-to-world transform: translate, then spin, then scale.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::from(self.position))
            * Mat4::from_rotation_y(self.rotation)
            * Mat4::from_scale(self.scale)
    }

    /// Rebuild the bounding volume for the current pose under `view`.
    pub fn recalculate_volume(&mut self, view: &Mat4) {
        let transform = self.transform();
        let modelview = *view * transform;
        self.volume.recalculate(&self.mesh, &modelview, &transform);
    }

    /// Replace the bounding volume with a fresh one of another kind. It
    /// is empty until the next
    /// [`recalculate_volume`](Self::recalculate_volume).
    pub fn set_volume_kind(&mut self, kind: VolumeKind) {
        if self.volume.kind() != kind {
            self.volume = kind.create();
        }
    }

    /// The bounding volume as of the last recompute.
    #[must_use]
    pub fn volume(&self) -> &dyn BoundingVolume {
        self.volume.as_ref()
    }

    /// Whether a world-space ray hits the bounding volume.
    #[must_use]
    pub fn intersects(&self, ray: &Ray) -> bool {
        self.volume.intersects(ray)
    }

    /// Whether the bounding volume survives culling against `projection`.
    #[must_use]
    pub fn in_frustum(&self, projection: &Mat4) -> bool {
        self.volume.in_frustum(projection)
    }

    /// Overlay geometry for the bounding volume.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.volume.overlay()
    }

    /// Whether the bounding volume overlay is drawn.
    #[must_use]
    pub fn draws_volume(&self) -> bool {
        self.draw_volume
    }

    /// Show or hide the bounding volume overlay.
    pub fn set_draw_volume(&mut self, draw: bool) {
        self.draw_volume = draw;
    }

    /// Flip the bounding volume overlay.
    pub fn toggle_draw_volume(&mut self) {
        self.draw_volume = !self.draw_volume;
    }
}
