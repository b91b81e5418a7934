//! Backend test support utilities
//!
//! Shared by the backend's integration tests: one-time logging setup and
//! generators for unique ids so tests never collide.

pub mod logging;
pub mod unique_helpers;
