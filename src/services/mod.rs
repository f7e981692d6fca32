// webframe services
// Persistence of the window configuration.

pub mod config_store;
