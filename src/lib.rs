//! webframe: a native desktop window hosting an embedded web view.
//!
//! The library exposes the initialization record and config store, the
//! toolkit-independent bridge (cross-thread invocation, script message
//! channel, geometry change detection) and, with the `gui` feature, the
//! `wry` + `tao` window host.

pub mod bridge;
pub mod logging;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
