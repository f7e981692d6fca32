use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bounded::{StartUrl, TempPath, Title};
use super::errors::InitError;
use super::scheme::{SchemeName, MAX_CUSTOM_SCHEMES};

/// Layout version the host understands. A record tagged with any other
/// version is rejected before anything is created.
pub const INIT_LAYOUT_VERSION: u32 = 1;

/// Zoom percentage that leaves the engine's zoom level untouched.
pub const DEFAULT_ZOOM: i32 = 100;

/// Initialization record for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitParams {
    pub layout_version: u32,
    pub title: Title,
    pub start_url: Option<StartUrl>,
    pub start_html: Option<String>,
    pub temporary_files_path: Option<TempPath>,
    pub custom_scheme_names: Vec<SchemeName>,

    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub zoom: i32,

    pub resizable: bool,
    pub fullscreen: bool,
    pub maximized: bool,
    pub minimized: bool,
    pub topmost: bool,
    pub chromeless: bool,
    pub center_on_initialize: bool,
    pub use_os_default_size: bool,
    pub use_os_default_location: bool,

    pub context_menu_enabled: bool,
    pub dev_tools_enabled: bool,
    pub grant_browser_permissions: bool,

    /// End the event loop when this window closes.
    pub exit_on_close: bool,
}

impl Default for InitParams {
    fn default() -> Self {
        Self {
            layout_version: INIT_LAYOUT_VERSION,
            title: Title::default(),
            start_url: None,
            start_html: None,
            temporary_files_path: None,
            custom_scheme_names: Vec::new(),
            left: 0,
            top: 0,
            width: 800,
            height: 600,
            zoom: DEFAULT_ZOOM,
            resizable: true,
            fullscreen: false,
            maximized: false,
            minimized: false,
            topmost: false,
            chromeless: false,
            center_on_initialize: false,
            use_os_default_size: false,
            use_os_default_location: false,
            context_menu_enabled: true,
            dev_tools_enabled: true,
            grant_browser_permissions: true,
            exit_on_close: true,
        }
    }
}

/// What the web view loads first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartContent<'a> {
    Url(&'a str),
    Html(&'a str),
}

impl InitParams {
    pub fn with_title(mut self, title: &str) -> Result<Self, InitError> {
        self.title = Title::new(title)?;
        Ok(self)
    }

    pub fn with_start_url(mut self, url: &str) -> Result<Self, InitError> {
        self.start_url = Some(StartUrl::new(url)?);
        Ok(self)
    }

    pub fn with_start_html(mut self, html: impl Into<String>) -> Self {
        self.start_html = Some(html.into());
        self
    }

    pub fn with_custom_scheme(mut self, name: &str) -> Result<Self, InitError> {
        self.custom_scheme_names.push(SchemeName::parse(name)?);
        Ok(self)
    }

    /// The start URL wins when both are present. Empty strings count as absent.
    pub fn start_content(&self) -> Option<StartContent<'_>> {
        if let Some(url) = self.start_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(StartContent::Url(url));
        }
        self.start_html
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(StartContent::Html)
    }

    /// Checks everything that would make window construction fail.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.layout_version != INIT_LAYOUT_VERSION {
            return Err(InitError::LayoutMismatch {
                expected: INIT_LAYOUT_VERSION,
                actual: self.layout_version,
            });
        }

        if self.start_content().is_none() {
            return Err(InitError::MissingStartContent);
        }

        if self.custom_scheme_names.len() > MAX_CUSTOM_SCHEMES {
            return Err(InitError::TooManySchemes(self.custom_scheme_names.len()));
        }

        let mut seen = HashSet::new();
        for name in &self.custom_scheme_names {
            if !seen.insert(name.as_str()) {
                return Err(InitError::DuplicateScheme(name.to_string()));
            }
        }

        if self.zoom <= 0 {
            return Err(InitError::InvalidZoom(self.zoom));
        }

        Ok(())
    }
}
