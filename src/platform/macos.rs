// webframe platform paths for macOS
// Config: ~/Library/Application Support/webframe
// Cache:  ~/Library/Caches/webframe

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `~/Library/Application Support/webframe`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("webframe")
}

/// `~/Library/Caches/webframe`
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("webframe")
}
