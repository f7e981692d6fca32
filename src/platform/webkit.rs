// WebKitGTK hooks wry does not expose: context-menu suppression,
// permission requests, engine settings, work-area aware monitor
// enumeration and pumping the GTK main loop.

use std::rc::Rc;

use gtk::gdk;
use tracing::debug;
use webkit2gtk::{PermissionRequestExt, SettingsExt, WebViewExt};
use wry::WebViewExtUnix;

use crate::types::geometry::{MonitorInfo, Rect};
use crate::ui::fatal;
use crate::ui::flags::EngineFlags;

/// Applies engine settings and connects the signal handlers that consult
/// `flags` on every event.
pub(crate) fn install_hooks(webview: &wry::WebView, flags: &Rc<EngineFlags>) {
    let view = webview.webview();

    if let Some(settings) = WebViewExt::settings(&view) {
        settings.set_allow_file_access_from_file_urls(true);
        settings.set_allow_universal_access_from_file_urls(true);
        settings.set_allow_modal_dialogs(true);
        settings.set_enable_media_stream(true);
        settings.set_javascript_can_access_clipboard(true);
        settings.set_javascript_can_open_windows_automatically(true);
        settings.set_enable_developer_extras(flags.dev_tools_enabled());
    }

    let menu_flags = Rc::clone(flags);
    view.connect_context_menu(move |_, _, _, _| {
        // true = handled, which suppresses the default menu
        !menu_flags.context_menu_enabled()
    });

    let permission_flags = Rc::clone(flags);
    view.connect_permission_request(move |_, request| {
        permission_flags.grant_permission_request(fatal::permission_notice, || request.allow())
    });
    debug!("webkit hooks installed");
}

pub(crate) fn set_developer_extras(webview: &wry::WebView, enabled: bool) {
    let view = webview.webview();
    if let Some(settings) = WebViewExt::settings(&view) {
        settings.set_enable_developer_extras(enabled);
    }
}

pub(crate) fn zoom_level(webview: &wry::WebView) -> f64 {
    WebViewExt::zoom_level(&webview.webview())
}

/// Runs one blocking iteration of the GTK main loop.
pub(crate) fn pump_once() {
    gtk::main_iteration_do(true);
}

fn to_rect(rect: &gdk::Rectangle) -> Rect {
    Rect {
        x: rect.x(),
        y: rect.y(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub(crate) fn monitors() -> Vec<MonitorInfo> {
    let Some(display) = gdk::Display::default() else {
        return Vec::new();
    };
    (0..display.n_monitors())
        .filter_map(|i| display.monitor(i))
        .map(|monitor| MonitorInfo {
            monitor: to_rect(&monitor.geometry()),
            work: to_rect(&monitor.workarea()),
        })
        .collect()
}
