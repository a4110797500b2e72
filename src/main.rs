//! Headless pickview demo: builds the default scene, replays a short
//! scripted session of clicks, drags and key presses, and logs what each
//! frame would draw.

use pickview::bounds::Overlay;
use pickview::input::{Modifiers, MouseButton};
use pickview::math::Mat4;
use pickview::options::Options;
use pickview::scene::{Mesh, PrimitiveSource};
use pickview::util::clock::FrameTimer;
use pickview::{FrameSink, InputEvent, Viewer, ViewerError};

/// Frames the scripted session runs before quitting on its own.
const DEMO_FRAMES: usize = 180;

/// Sink that only counts what it is asked to draw.
#[derive(Default)]
struct LogSink {
    triangles: usize,
    overlays: usize,
    uploaded_bytes: usize,
}

impl FrameSink for LogSink {
    fn begin_frame(&mut self, _view: &Mat4, _projection: &Mat4) {
        self.triangles = 0;
        self.overlays = 0;
        self.uploaded_bytes = 0;
    }

    fn draw_mesh(&mut self, mesh: &Mesh, transform: &Mat4) {
        self.triangles += mesh.triangles().count();
        let positions: &[u8] = bytemuck::cast_slice(mesh.position_data());
        let normals: &[u8] = bytemuck::cast_slice(mesh.normal_data());
        self.uploaded_bytes += positions.len()
            + normals.len()
            + bytemuck::bytes_of(transform).len();
        log::trace!("mesh of {} faces under {transform:?}", mesh.face_count());
    }

    fn draw_overlay(&mut self, overlay: &Overlay) {
        self.overlays += 1;
        log::trace!("overlay {overlay:?}");
    }
}

/// Window size from `[<width> <height>]`; `None` when no size was given.
fn parse_args(args: &[String]) -> Result<Option<(u32, u32)>, ViewerError> {
    let parse = |s: &str, what: &str| {
        s.parse::<u32>()
            .map_err(|e| ViewerError::InvalidArgs(format!("{what} {s:?}: {e}")))
    };
    match args {
        [] => Ok(None),
        [width, height] => {
            Ok(Some((parse(width, "width")?, parse(height, "height")?)))
        }
        _ => Err(ViewerError::InvalidArgs(
            "usage: pickview [<width> <height>]".into(),
        )),
    }
}

/// Input a user might produce while watching the scene: a click on the
/// middle of the window, a shift-drag, then the volume and help keys.
fn scripted_events(width: u32, height: u32) -> Vec<(usize, InputEvent)> {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let mut events = vec![
        (20, InputEvent::CursorMoved { x: cx, y: cy }),
        (20, left(true)),
        (21, left(false)),
        (40, shift(true)),
        (40, left(true)),
    ];
    events.extend((0..30).map(|i| {
        (
            41 + i,
            InputEvent::CursorMoved {
                x: cx + 4.0 * i as f32,
                y: cy,
            },
        )
    }));
    events.extend([
        (71, left(false)),
        (71, shift(false)),
        (90, key("KeyB")),
        (120, key("KeyV")),
        (150, key("KeyH")),
        (DEMO_FRAMES, key("KeyQ")),
    ]);
    events
}

fn left(pressed: bool) -> InputEvent {
    InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed,
    }
}

fn shift(held: bool) -> InputEvent {
    InputEvent::ModifiersChanged(Modifiers {
        shift: held,
        ..Modifiers::default()
    })
}

fn key(name: &str) -> InputEvent {
    InputEvent::KeyPressed { key: name.into() }
}

fn run() -> Result<(), ViewerError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = Options::default();
    if let Some((width, height)) = parse_args(&args)? {
        options.window.set_size(width, height)?;
    }
    let (width, height) = options.window.initial_size();

    let mut viewer = Viewer::new(options)?;
    viewer.load_default_scene(&PrimitiveSource)?;
    println!("{}", viewer.help_text());

    let events = scripted_events(width, height);
    let mut timer = FrameTimer::default();
    let mut sink = LogSink::default();

    for frame in 0..=DEMO_FRAMES {
        for (_, event) in events.iter().filter(|(at, _)| *at == frame) {
            if let Some(command) = viewer.handle_event(event) {
                log::debug!("frame {frame}: {command:?}");
            }
        }
        if viewer.should_quit() {
            break;
        }

        std::thread::sleep(timer.until_next_frame());
        let stats = viewer.frame_now(&mut sink);
        timer.end_frame();
        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {} drawn, {} culled, {} triangles \
                 ({} bytes), {} overlays, {:.0} fps",
                stats.drawn,
                stats.culled,
                sink.triangles,
                sink.uploaded_bytes,
                sink.overlays,
                timer.fps()
            );
        }
    }
    Ok(())
}

fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
