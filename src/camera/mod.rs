//! Camera system for 3D scene viewing.
//!
//! Provides a first-person camera turned by a virtual trackball, the
//! perspective projection, viewport unprojection for picking, and view
//! frustum tests.

/// Core camera and projection types.
pub mod core;
/// View frustum extraction and containment tests.
pub mod frustum;
/// Virtual trackball mapping pointer drags to rotations.
pub mod trackball;
/// Window viewport and unprojection.
pub mod viewport;

pub use self::core::{Camera, Projection};
pub use frustum::Frustum;
pub use trackball::{Trackball, TrackballState};
pub use viewport::Viewport;
