//! Window-toolkit-independent parts of the host: the invocation bridge,
//! the script message channel, geometry change detection and zoom
//! conversion. The `ui` layer wires these into `tao` and `wry`.

pub mod completion;
pub mod geometry;
pub mod invoke;
pub mod script;
pub mod zoom;
