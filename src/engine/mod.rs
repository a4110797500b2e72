//! The viewer: explicit application context tying scene, camera controls,
//! input and timing together.
//!
//! Nothing here is global. The windowing layer creates one [`Viewer`],
//! forwards [`InputEvent`](crate::InputEvent)s to it, and calls
//! [`Viewer::frame`] on each redraw with a
//! [`FrameSink`](sink::FrameSink) that draws.

pub mod command;
mod frame;
mod input;
pub mod sink;

use self::sink::FrameStats;
use crate::camera::{Camera, Projection, Trackball, Viewport};
use crate::error::ViewerError;
use crate::input::{InputProcessor, KeyAction};
use crate::options::Options;
use crate::scene::{MeshSource, Scene};
use crate::util::clock::Clock;

/// Scene, trackball, viewport, projection, options, input state and clock.
#[derive(Debug)]
pub struct Viewer {
    options: Options,
    scene: Scene,
    trackball: Trackball,
    viewport: Viewport,
    projection: Projection,
    input: InputProcessor,
    clock: Clock,
    redraw_requested: bool,
    quit_requested: bool,
    last_stats: FrameStats,
}

impl Viewer {
    /// Viewer with an empty scene, sized from the window options.
    ///
    /// Fails when the configured window size is outside its limits.
    pub fn new(options: Options) -> Result<Self, ViewerError> {
        let camera = Camera::from_options(&options.camera);
        let scene = Scene::new(camera, options.animation.clone());
        Self::with_scene(options, scene)
    }

    /// Viewer around a prepared scene. Volumes are fitted to the current
    /// camera so picks work before the first frame.
    pub fn with_scene(
        options: Options,
        scene: Scene,
    ) -> Result<Self, ViewerError> {
        let (width, height) = options.window.initial_size();
        options.window.validate(width, height)?;

        let viewport = Viewport::new(width, height);
        let aspect = width as f32 / height as f32;
        let projection = Projection::from_options(&options.camera, aspect);
        let mut viewer = Self {
            input: InputProcessor::from_options(&options),
            options,
            scene,
            trackball: Trackball::default(),
            viewport,
            projection,
            clock: Clock::start(),
            redraw_requested: true,
            quit_requested: false,
            last_stats: FrameStats::default(),
        };
        viewer.fit_trackball();
        let view = viewer.scene.camera().view_matrix();
        viewer.scene.recalculate_volumes(&view);
        log::debug!("viewer {width}x{height}");
        Ok(viewer)
    }

    /// Insert the stock three-model layout from `source`, using the
    /// configured volume kind.
    pub fn load_default_scene<S: MeshSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<(), ViewerError> {
        let kind = self.options.culling.volume_kind;
        let _ = self.scene.insert_default_layout(source, kind)?;
        let view = self.scene.camera().view_matrix();
        self.scene.recalculate_volumes(&view);
        Ok(())
    }

    /// Center the trackball on the viewport and size it to the configured
    /// fraction of the smaller side.
    fn fit_trackball(&mut self) {
        let (cx, cy) = self.viewport.center();
        let side = self.viewport.width.min(self.viewport.height) as f32;
        self.trackball.set_center(cx, cy);
        self.trackball
            .set_radius(side * self.options.culling.trackball_radius_fraction);
    }

    // -- Accessors --

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The scene camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.scene.camera()
    }

    /// The trackball.
    #[must_use]
    pub fn trackball(&self) -> &Trackball {
        &self.trackball
    }

    /// The window viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Seconds since the viewer started.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    /// Counts from the most recent frame.
    #[must_use]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Whether a quit command has been executed.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Consume the pending redraw request, if any.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Key and mouse help, one line per entry.
    #[must_use]
    pub fn help_text(&self) -> String {
        let bindings = &self.options.keybindings;
        let mut lines: Vec<String> = KeyAction::ALL
            .iter()
            .filter_map(|&action| {
                let key = bindings.key_for(action)?;
                Some(format!("Press {key} to {}.", action.description()))
            })
            .collect();
        lines.push("Click a model to toggle its bounding volume.".into());
        lines.push(format!(
            "Hold {:?} and drag to turn the camera.",
            self.options.culling.trackball_modifier
        ));
        lines.join("\n")
    }
}
