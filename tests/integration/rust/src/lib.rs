//! Integration test crate for the cooperative task scheduler workspace.
//!
//! The tests live under `tests/`; this library is intentionally empty.
