// webframe platform paths for Linux
// Config: ~/.config/webframe
// Cache:  ~/.cache/webframe

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "webframe";

/// Resolves `$<xdg_var>/webframe`, falling back to `$HOME/<fallback>/webframe`.
fn xdg_dir(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    if let Some(xdg) = xdg.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
    for part in fallback {
        path.push(part);
    }
    path.join(APP_DIR)
}

/// Returns the configuration directory on Linux.
/// Uses `$XDG_CONFIG_HOME/webframe` if set, otherwise `~/.config/webframe`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_CONFIG_HOME").ok(),
        env::var("HOME").ok(),
        &[".config"],
    )
}

/// Returns the cache directory on Linux.
/// Uses `$XDG_CACHE_HOME/webframe` if set, otherwise `~/.cache/webframe`.
pub fn get_cache_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_CACHE_HOME").ok(),
        env::var("HOME").ok(),
        &[".cache"],
    )
}
