use std::cell::Cell;

use tracing::info;

use crate::types::init_params::InitParams;

/// Engine behavior toggles shared between the window host and the
/// engine signal handlers. Event-loop thread only.
#[derive(Debug)]
pub struct EngineFlags {
    context_menu_enabled: Cell<bool>,
    dev_tools_enabled: Cell<bool>,
    grant_browser_permissions: Cell<bool>,
}

impl EngineFlags {
    pub fn from_params(params: &InitParams) -> Self {
        Self {
            context_menu_enabled: Cell::new(params.context_menu_enabled),
            dev_tools_enabled: Cell::new(params.dev_tools_enabled),
            grant_browser_permissions: Cell::new(params.grant_browser_permissions),
        }
    }

    pub fn context_menu_enabled(&self) -> bool {
        self.context_menu_enabled.get()
    }

    pub fn set_context_menu_enabled(&self, enabled: bool) {
        self.context_menu_enabled.set(enabled);
    }

    pub fn dev_tools_enabled(&self) -> bool {
        self.dev_tools_enabled.get()
    }

    pub fn set_dev_tools_enabled(&self, enabled: bool) {
        self.dev_tools_enabled.set(enabled);
    }

    pub fn grant_browser_permissions(&self) -> bool {
        self.grant_browser_permissions.get()
    }

    pub fn set_grant_browser_permissions(&self, grant: bool) {
        self.grant_browser_permissions.set(grant);
    }

    /// Every permission request is granted after the blocking notice;
    /// there is no denial path. `grant_browser_permissions` is reported
    /// but does not change the outcome. Returns true (request handled).
    pub fn grant_permission_request<N, A>(&self, notice: N, allow: A) -> bool
    where
        N: FnOnce(),
        A: FnOnce(),
    {
        notice();
        allow();
        info!(
            flag = self.grant_browser_permissions(),
            "permission request granted"
        );
        true
    }
}
