//! Per-frame update, culling and submission.

use super::sink::{FrameSink, FrameStats};
use super::Viewer;

impl Viewer {
    /// Run one frame at `elapsed` seconds since start.
    ///
    /// Order: an active trackball turns the camera and closes its
    /// increment; then each model in scene order is animated, gets its
    /// volume rebuilt under the new view, and is submitted to `sink` only
    /// if the volume passes the frustum test. Flagged models also submit
    /// their volume overlay.
    pub fn frame<S: FrameSink + ?Sized>(
        &mut self,
        sink: &mut S,
        elapsed: f32,
    ) -> FrameStats {
        if self.trackball.is_active() {
            let rotation = self.trackball.rotation();
            self.scene.camera_mut().rotate(rotation);
            self.trackball.advance();
        }

        let view = self.scene.camera().view_matrix();
        let projection = self.projection.matrix();
        sink.begin_frame(&view, &projection);

        let mut stats = FrameStats::default();
        for model in self.scene.models_mut() {
            model.update(elapsed);
            model.recalculate_volume(&view);

            if !model.in_frustum(&projection) {
                log::trace!("model {} culled", model.id());
                stats.culled += 1;
                continue;
            }
            log::trace!("model {} drawn at {:?}", model.id(), model.position());
            sink.draw_mesh(model.mesh(), &model.transform());
            stats.drawn += 1;
            if model.draws_volume() {
                sink.draw_overlay(&model.overlay());
                stats.overlays += 1;
            }
        }

        if stats != self.last_stats {
            log::debug!(
                "frame: {} drawn, {} culled, {} overlays",
                stats.drawn,
                stats.culled,
                stats.overlays
            );
        }
        self.last_stats = stats;
        stats
    }

    /// Run one frame at the viewer clock's current time.
    pub fn frame_now<S: FrameSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> FrameStats {
        let elapsed = self.clock.elapsed_secs();
        self.frame(sink, elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{Overlay, VolumeKind};
    use crate::camera::Camera;
    use crate::engine::command::ViewerCommand;
    use crate::math::{Mat4, Point3, Vec3};
    use crate::options::{AnimationOptions, Options};
    use crate::scene::{primitives, Mesh, Scene};

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        meshes: Vec<Mat4>,
        overlays: Vec<Overlay>,
    }

    impl FrameSink for Recorder {
        fn begin_frame(&mut self, _view: &Mat4, _projection: &Mat4) {
            self.frames += 1;
            self.meshes.clear();
            self.overlays.clear();
        }

        fn draw_mesh(&mut self, _mesh: &Mesh, transform: &Mat4) {
            self.meshes.push(*transform);
        }

        fn draw_overlay(&mut self, overlay: &Overlay) {
            self.overlays.push(overlay.clone());
        }
    }

    fn viewer(kind: VolumeKind) -> Viewer {
        let options = Options::default();
        let camera = Camera::from_options(&options.camera);
        let animation = AnimationOptions {
            bob_amplitude: 0.0,
            ..AnimationOptions::default()
        };
        let mut scene = Scene::with_seed(camera, animation, 3);
        let cube = primitives::cube().unwrap();
        // Ahead of the camera, then well off to the side.
        let _ = scene.insert(cube.clone(), Point3::new(0.0, 1.5, 0.0), kind);
        let _ = scene.insert(cube, Point3::new(40.0, 1.5, 0.0), kind);
        Viewer::with_scene(options, scene).unwrap()
    }

    #[test]
    fn submits_only_models_in_frustum() {
        for kind in [VolumeKind::Box, VolumeKind::Sphere] {
            let mut v = viewer(kind);
            let mut sink = Recorder::default();
            let stats = v.frame(&mut sink, 0.5);
            assert_eq!(sink.frames, 1);
            assert_eq!(stats.drawn, 1, "{kind:?}");
            assert_eq!(stats.culled, 1, "{kind:?}");
            assert_eq!(sink.meshes.len(), 1);
            assert_eq!(sink.meshes[0], v.scene().models()[0].transform());
            assert!(sink.overlays.is_empty());
        }
    }

    #[test]
    fn prepared_scene_is_pickable_before_first_frame() {
        for kind in [VolumeKind::Box, VolumeKind::Sphere] {
            let mut v = viewer(kind);
            let (cx, cy) = v.viewport().center();
            assert_eq!(v.pick(cx as f32, cy as f32), Some(0), "{kind:?}");
            assert!(v.scene().models()[0].draws_volume(), "{kind:?}");
            assert_eq!(v.pick(1.0, 1.0), None, "{kind:?}");
        }
    }

    #[test]
    fn flagged_models_submit_overlays() {
        let mut v = viewer(VolumeKind::Box);
        v.execute(ViewerCommand::ToggleAllVolumes);
        let mut sink = Recorder::default();
        let stats = v.frame(&mut sink, 0.0);
        // The culled model's overlay is not drawn either.
        assert_eq!(stats.overlays, 1);
        assert!(matches!(sink.overlays[0], Overlay::Box { .. }));

        v.execute(ViewerCommand::CycleVolumeKind);
        let _ = v.frame(&mut sink, 0.0);
        assert!(matches!(
            sink.overlays[0],
            Overlay::Sphere { slices: 32, stacks: 32, .. }
        ));
    }

    #[test]
    fn trackball_drag_turns_camera_about_fixed_eye() {
        let mut v = viewer(VolumeKind::Box);
        let mut sink = Recorder::default();
        let eye = v.camera().eye;
        let gaze = v.camera().gaze();
        let (cx, cy) = v.viewport().center();
        let (cx, cy) = (cx as f32, cy as f32);

        v.execute(ViewerCommand::BeginTrackball { x: cx, y: cy });
        v.execute(ViewerCommand::DragTrackball { x: cx + 60.0, y: cy });
        let _ = v.frame(&mut sink, 0.0);
        let turned = v.camera().gaze();
        assert_eq!(v.camera().eye, eye);
        assert!(turned.dot(gaze) < 0.999);
        assert_eq!(v.trackball().point1(), v.trackball().point2());

        // No further motion: the next frame applies the identity.
        let _ = v.frame(&mut sink, 0.0);
        assert!((v.camera().gaze() - turned).length() < 1e-5);

        v.execute(ViewerCommand::EndTrackball);
        v.execute(ViewerCommand::DragTrackball { x: cx, y: cy + 90.0 });
        let _ = v.frame(&mut sink, 0.0);
        assert!((v.camera().gaze() - turned).length() < 1e-5);

        v.execute(ViewerCommand::ResetCamera);
        assert!((v.camera().gaze() - gaze).length() < 1e-6);
        assert!((v.camera().up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn animation_uses_passed_time() {
        let mut v = viewer(VolumeKind::Box);
        let mut sink = Recorder::default();
        let _ = v.frame(&mut sink, 1.0);
        let first = v.scene().models()[0].rotation();
        let _ = v.frame(&mut sink, 1.0);
        assert_eq!(v.scene().models()[0].rotation(), first);
        let _ = v.frame(&mut sink, 2.0);
        let speed = AnimationOptions::default().rotation_speed;
        let turned = v.scene().models()[0].rotation() - first;
        assert!((turned - speed).abs() < 1e-3);
    }
}
