// webframe platform abstraction
// Provides platform-specific paths, plus the WebKitGTK engine hooks on Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(all(target_os = "linux", feature = "gui"))]
pub(crate) mod webkit;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/webframe` (or `$XDG_CONFIG_HOME/webframe`)
/// - **macOS**: `~/Library/Application Support/webframe`
/// - **Windows**: `%APPDATA%/webframe`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific cache directory.
///
/// - **Linux**: `~/.cache/webframe` (or `$XDG_CACHE_HOME/webframe`)
/// - **macOS**: `~/Library/Caches/webframe`
/// - **Windows**: `%LOCALAPPDATA%/webframe/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}

/// Where the web engine keeps its data when the initialization record
/// names no temporary-files path.
pub fn default_temp_dir() -> PathBuf {
    get_cache_dir().join("webview")
}
