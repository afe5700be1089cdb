//! Event types and observers.
//!
//! Submodules:
//! - [`camera`] – reframe the cursor camera through an observer
pub mod camera;
