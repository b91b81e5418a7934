//! Test-only setup shared by the unit tests.

pub mod logging;
