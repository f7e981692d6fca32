// webframe platform paths for Windows
// Config: %APPDATA%/webframe
// Cache:  %LOCALAPPDATA%/webframe/cache

use std::env;
use std::path::PathBuf;

/// `%APPDATA%/webframe`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("webframe")
}

/// `%LOCALAPPDATA%/webframe/cache`
pub fn get_cache_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join("webframe").join("cache")
}
