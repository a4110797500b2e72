// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackball camera, ray picking and view-frustum culling for
//! interactive 3D scene viewers.
//!
//! pickview is the geometric core of a scene viewer: it owns the camera,
//! turns pointer drags into camera rotations, fits a bounding volume to
//! every model each frame, resolves clicks to models with a pick ray, and
//! culls models whose volume leaves the view frustum. Drawing, windowing
//! and mesh parsing stay with the host behind small traits.
//!
//! # Key entry points
//!
//! - [`Viewer`] - the application context; feed it [`InputEvent`]s and
//!   call [`Viewer::frame`] with a [`FrameSink`] each redraw
//! - [`scene::Scene`] - models in insertion order plus the camera
//! - [`bounds::BoundingVolume`] - box and sphere volumes behind one trait
//! - [`options::Options`] - runtime configuration (window, camera,
//!   animation, culling, key bindings)
//! - [`math`] - vectors, points, column-major matrices and quaternions
//!
//! # Frame order
//!
//! Input is drained first. An active trackball then turns the camera, and
//! each model is animated, gets its volume rebuilt under the new view, and
//! is submitted only when the volume passes the frustum test.

pub mod bounds;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;

pub use engine::command::ViewerCommand;
pub use engine::sink::{FrameSink, FrameStats};
pub use engine::Viewer;
pub use error::ViewerError;
pub use input::{InputEvent, InputProcessor};
