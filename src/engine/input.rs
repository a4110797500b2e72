//! Input dispatch and command execution for [`Viewer`].

use super::command::ViewerCommand;
use super::Viewer;
use crate::bounds::VolumeKind;
use crate::camera::{Camera, Viewport};
use crate::input::InputEvent;

// ── Unified input handler ──

impl Viewer {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. The event goes through the
    /// input processor and any resulting command is executed. Returns that
    /// command.
    ///
    /// # Example
    ///
    /// ```ignore
    /// viewer.handle_event(&InputEvent::CursorMoved { x, y });
    /// ```
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
    ) -> Option<ViewerCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    /// Execute one command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::BeginTrackball { x, y } => {
                self.trackball.begin(x, y);
            }
            ViewerCommand::DragTrackball { x, y } => self.trackball.drag(x, y),
            ViewerCommand::EndTrackball => self.trackball.end(),
            ViewerCommand::ResetCamera => {
                *self.scene.camera_mut() =
                    Camera::from_options(&self.options.camera);
            }
            ViewerCommand::Pick { x, y } => {
                let _ = self.pick(x, y);
            }
            ViewerCommand::ToggleAllVolumes => {
                let on = self.scene.toggle_all_volumes();
                let state = if on { "on" } else { "off" };
                log::info!("drawing bounding volumes is {state}");
            }
            ViewerCommand::CycleVolumeKind => self.cycle_volume_kind(),
            ViewerCommand::Resize { width, height } => {
                self.resize(width, height);
            }
            ViewerCommand::RequestRedraw => self.redraw_requested = true,
            ViewerCommand::ShowHelp => {
                for line in self.help_text().lines() {
                    log::info!("{line}");
                }
            }
            ViewerCommand::Quit => {
                log::info!("exiting");
                self.quit_requested = true;
            }
        }
    }

    /// Cast a ray through a window position (origin top-left) and toggle
    /// the overlay of the first model it hits. Returns that model's id.
    ///
    /// Volumes are tested as of the last frame.
    pub fn pick(&mut self, x: f32, y: f32) -> Option<u32> {
        let view = self.scene.camera().view_matrix();
        let projection = self.projection.matrix();
        let Some(ray) = self.viewport.pick_ray(x, y, &view, &projection) else {
            log::debug!("pick at ({x}, {y}): view-projection not invertible");
            return None;
        };
        let hit = self.scene.pick(&ray);
        if hit.is_none() {
            log::debug!("pick at ({x}, {y}) hit nothing");
        }
        hit
    }

    /// Adopt a new window size. Zero-area sizes (minimized windows) are
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.projection.resize(width, height);
        self.fit_trackball();
    }

    /// Switch every model, and models inserted later, to the other volume
    /// kind.
    fn cycle_volume_kind(&mut self) {
        let kind = match self.options.culling.volume_kind {
            VolumeKind::Box => VolumeKind::Sphere,
            VolumeKind::Sphere => VolumeKind::Box,
        };
        self.options.culling.volume_kind = kind;
        let view = self.scene.camera().view_matrix();
        for model in self.scene.models_mut() {
            model.set_volume_kind(kind);
            model.recalculate_volume(&view);
        }
        log::info!("bounding volumes are now {}", kind.name());
    }
}
