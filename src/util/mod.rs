//! Shared utilities for the viewer.

pub mod clock;
