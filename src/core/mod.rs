//! Core simulation primitives shared by every plugin: error type, scale
//! policy, and the scene-space boundary.

pub mod error;
pub mod scale;
pub mod space;

pub use error::CoreError;
