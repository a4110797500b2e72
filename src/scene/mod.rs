//! The scene: an ordered list of animated models and the camera that
//! views them.
//!
//! Models keep insertion order. Picking walks that order and stops at the
//! first hit, and frame submission follows it too.

mod mesh;
mod model;
pub mod primitives;

pub use mesh::{Mesh, MeshSource, Triangle};
pub use model::Model;
pub use primitives::PrimitiveSource;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bounds::VolumeKind;
use crate::camera::Camera;
use crate::error::ViewerError;
use crate::math::{Mat4, Point3};
use crate::options::AnimationOptions;
use crate::picking::{first_hit, Ray};

/// Mesh identifiers and positions of the stock three-model layout.
pub const DEFAULT_LAYOUT: [(&str, Point3); 3] = [
    ("octahedron", Point3::new(-2.0, 1.5, -0.5)),
    ("cube", Point3::new(2.0, 1.5, -0.5)),
    ("sphere", Point3::new(0.0, 1.5, 0.5)),
];

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Models in insertion order plus the camera.
#[derive(Debug)]
pub struct Scene {
    models: Vec<Model>,
    camera: Camera,
    animation: AnimationOptions,
    rng: StdRng,
    next_model_id: u32,
    volumes_visible: bool,
}

impl Scene {
    /// Empty scene whose model phases come from OS entropy.
    #[must_use]
    pub fn new(camera: Camera, animation: AnimationOptions) -> Self {
        Self::with_rng(camera, animation, StdRng::from_os_rng())
    }

    /// Empty scene with reproducible model phases.
    #[must_use]
    pub fn with_seed(
        camera: Camera,
        animation: AnimationOptions,
        seed: u64,
    ) -> Self {
        Self::with_rng(camera, animation, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        camera: Camera,
        animation: AnimationOptions,
        rng: StdRng,
    ) -> Self {
        Self {
            models: Vec::new(),
            camera,
            animation,
            rng,
            next_model_id: 0,
            volumes_visible: false,
        }
    }

    // -- Models --

    /// Append a model built from `mesh` at a world position. Returns its id.
    pub fn insert(
        &mut self,
        mesh: Mesh,
        position: Point3,
        kind: VolumeKind,
    ) -> u32 {
        let id = self.next_model_id;
        self.next_model_id += 1;
        let phase = f32::from(self.rng.random_range(0..360u16));
        log::debug!(
            "model {id}: {} vertices at {position:?}, phase {phase} deg, \
             {} volume",
            mesh.vertex_count(),
            kind.name()
        );
        let mut model =
            Model::new(id, mesh, position, kind, &self.animation, phase);
        model.set_draw_volume(self.volumes_visible);
        self.models.push(model);
        id
    }

    /// Load `mesh_id` from `source` and insert it.
    pub fn insert_from<S: MeshSource + ?Sized>(
        &mut self,
        source: &S,
        mesh_id: &str,
        position: Point3,
        kind: VolumeKind,
    ) -> Result<u32, ViewerError> {
        let mesh = source.load(mesh_id)?;
        Ok(self.insert(mesh, position, kind))
    }

    /// Insert the stock layout from `source`.
    pub fn insert_default_layout<S: MeshSource + ?Sized>(
        &mut self,
        source: &S,
        kind: VolumeKind,
    ) -> Result<Vec<u32>, ViewerError> {
        DEFAULT_LAYOUT
            .iter()
            .map(|&(mesh_id, position)| {
                self.insert_from(source, mesh_id, position, kind)
            })
            .collect()
    }

    /// Models in insertion order.
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Mutable models in insertion order.
    pub fn models_mut(&mut self) -> &mut [Model] {
        &mut self.models
    }

    /// Model by id.
    #[must_use]
    pub fn model(&self, id: u32) -> Option<&Model> {
        self.models.iter().find(|m| m.id() == id)
    }

    /// Number of models.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Remove all models.
    pub fn clear(&mut self) {
        self.models.clear();
    }

    // -- Camera --

    /// The scene camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable scene camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    // -- Volumes --

    /// Rebuild every model's bounding volume under `view` without
    /// advancing animation.
    pub fn recalculate_volumes(&mut self, view: &Mat4) {
        for model in &mut self.models {
            model.recalculate_volume(view);
        }
    }

    /// Toggle the overlay flag on the first model whose volume the ray
    /// hits. Returns that model's id.
    pub fn pick(&mut self, ray: &Ray) -> Option<u32> {
        let index = first_hit(self.models.iter().map(Model::volume), ray)?;
        let model = &mut self.models[index];
        model.toggle_draw_volume();
        log::debug!(
            "picked model {} (overlay {})",
            model.id(),
            if model.draws_volume() { "on" } else { "off" }
        );
        Some(model.id())
    }

    /// Show or hide every model's overlay.
    pub fn set_all_volumes_visible(&mut self, visible: bool) {
        self.volumes_visible = visible;
        for model in &mut self.models {
            model.set_draw_volume(visible);
        }
    }

    /// Flip the scene-wide overlay switch and apply it to every model.
    /// Returns the new state.
    pub fn toggle_all_volumes(&mut self) -> bool {
        self.set_all_volumes_visible(!self.volumes_visible);
        self.volumes_visible
    }

    /// State of the scene-wide overlay switch.
    #[must_use]
    pub fn volumes_visible(&self) -> bool {
        self.volumes_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn scene() -> Scene {
        let camera =
            Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::ORIGIN, Vec3::Y);
        Scene::with_seed(camera, AnimationOptions::default(), 7)
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut scene = scene();
        let ids = scene
            .insert_default_layout(&PrimitiveSource, VolumeKind::Box)
            .unwrap();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(scene.model_count(), 3);
        assert_eq!(scene.model(1).unwrap().position(), DEFAULT_LAYOUT[1].1);
        for m in scene.models() {
            assert!((0.0..360.0).contains(&m.phase_degrees()));
        }
    }

    #[test]
    fn unknown_mesh_is_reported() {
        let mut scene = scene();
        let err = scene
            .insert_from(
                &PrimitiveSource,
                "teapot",
                Point3::ORIGIN,
                VolumeKind::Box,
            )
            .unwrap_err();
        assert!(matches!(err, ViewerError::UnknownMesh(_)));
        assert_eq!(scene.model_count(), 0);
    }

    #[test]
    fn seeded_scenes_share_phases() {
        let (mut a, mut b) = (scene(), scene());
        for s in [&mut a, &mut b] {
            let _ = s.insert_default_layout(&PrimitiveSource, VolumeKind::Sphere)
                .unwrap();
        }
        let phases = |s: &Scene| {
            s.models()
                .iter()
                .map(Model::phase_degrees)
                .collect::<Vec<_>>()
        };
        assert_eq!(phases(&a), phases(&b));
    }

    #[test]
    fn pick_toggles_only_first_hit() {
        let mut scene = scene();
        let cube = primitives::cube().unwrap();
        let sphere = VolumeKind::Sphere;
        let near =
            scene.insert(cube.clone(), Point3::new(0.0, 0.0, 2.0), sphere);
        let far = scene.insert(cube, Point3::new(0.0, 0.0, -2.0), sphere);
        let view = scene.camera().view_matrix();
        scene.recalculate_volumes(&view);

        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Point3::ORIGIN);
        assert_eq!(scene.pick(&ray), Some(near));
        assert!(scene.model(near).unwrap().draws_volume());
        assert!(!scene.model(far).unwrap().draws_volume());

        let miss =
            Ray::new(Point3::new(5.0, 0.0, 10.0), Point3::new(5.0, 0.0, 0.0));
        assert_eq!(scene.pick(&miss), None);
    }

    #[test]
    fn toggle_all_applies_to_new_models() {
        let add_cube = |scene: &mut Scene| {
            let kind = VolumeKind::Box;
            scene
                .insert_from(&PrimitiveSource, "cube", Point3::ORIGIN, kind)
                .unwrap()
        };
        let mut scene = scene();
        let _ = add_cube(&mut scene);
        assert!(scene.toggle_all_volumes());
        assert!(scene.models()[0].draws_volume());
        let _ = add_cube(&mut scene);
        assert!(scene.models()[1].draws_volume());
        assert!(!scene.toggle_all_volumes());
        assert!(scene.models().iter().all(|m| !m.draws_volume()));
    }
}
