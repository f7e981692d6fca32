// webframe shared type definitions
// Plain data exchanged between the config layer, the bridge and the window host.

pub mod bounded;
pub mod errors;
pub mod geometry;
pub mod init_params;
pub mod scheme;
