//! The window wrapper: one `tao` window, one `wry` web view, and the
//! state the bridge needs (geometry tracker, zoom, engine flags,
//! host handlers).
//!
//! Everything here lives on the event-loop thread. Other threads reach
//! it only through `Dispatcher<WindowHost>`.

use std::borrow::Cow;
use std::path::PathBuf;
use std::rc::Rc;

use tao::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use tao::event_loop::EventLoopWindowTarget;
use tao::window::{Fullscreen, Window, WindowBuilder, WindowId};
use tracing::{debug, info, warn};
use wry::http::{header::CONTENT_TYPE, Request, Response, StatusCode};
use wry::{WebContext, WebView, WebViewBuilder};

use crate::bridge::completion::ScriptCompletion;
use crate::bridge::geometry::{visit_monitors, GeometryChange, GeometryTracker};
use crate::bridge::script::{self, BOOTSTRAP_SCRIPT};
use crate::bridge::zoom;
use crate::platform;
use crate::types::bounded::Title;
use crate::types::errors::{HostError, InitError};
use crate::types::geometry::{Bounds, MonitorInfo, Position, Size};
use crate::types::init_params::{InitParams, StartContent, DEFAULT_ZOOM};
use crate::types::scheme::SchemeResponse;
use crate::ui::flags::EngineFlags;
use crate::ui::handlers::WindowHandlers;

/// Fallback when the toolkit reports no usable scale factor.
const DEFAULT_DPI: u32 = 96;

pub struct WindowHost {
    window: Window,
    webview: WebView,
    // Declared after `webview` so it is dropped after it.
    _web_context: WebContext,
    flags: Rc<EngineFlags>,
    handlers: Rc<WindowHandlers>,
    geometry: GeometryTracker,
    zoom_factor: f64,
    topmost: bool,
    exit_on_close: bool,
    close_requested: bool,
}

impl WindowHost {
    /// Creates the window and web view, injects the bootstrap script and
    /// starts navigation. Returns only once all of that is done.
    pub fn build<T: 'static>(
        target: &EventLoopWindowTarget<T>,
        params: &InitParams,
        handlers: WindowHandlers,
    ) -> Result<Self, HostError> {
        params.validate()?;

        let mut builder = WindowBuilder::new()
            .with_title(params.title.as_str())
            .with_decorations(!params.chromeless)
            .with_resizable(params.resizable)
            .with_always_on_top(params.topmost);

        if params.fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(target.primary_monitor())));
        } else {
            if !params.use_os_default_size {
                builder = builder.with_inner_size(LogicalSize::new(params.width, params.height));
            }
            if !params.use_os_default_location && !params.center_on_initialize {
                builder = builder.with_position(LogicalPosition::new(params.left, params.top));
            }
        }

        let window = builder
            .build(target)
            .map_err(|e| HostError::Window(e.to_string()))?;

        if params.center_on_initialize && !params.fullscreen {
            center_window(&window);
        }
        if params.minimized {
            window.set_minimized(true);
        }
        if params.maximized {
            window.set_maximized(true);
        }

        let flags = Rc::new(EngineFlags::from_params(params));
        let handlers = Rc::new(handlers);

        let data_dir = params
            .temporary_files_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(platform::default_temp_dir);
        let mut web_context = WebContext::new(Some(data_dir));

        let webview = build_webview(&window, &mut web_context, params, &handlers)?;

        #[cfg(target_os = "linux")]
        platform::webkit::install_hooks(&webview, &flags);

        let zoom_factor = zoom::percent_to_factor(params.zoom);
        if params.zoom != DEFAULT_ZOOM {
            webview
                .zoom(zoom_factor)
                .map_err(|e| HostError::WebView(e.to_string()))?;
        }

        let geometry = GeometryTracker::new(current_bounds(&window));
        info!(
            title = %params.title,
            schemes = params.custom_scheme_names.len(),
            "window host ready"
        );

        Ok(Self {
            window,
            webview,
            _web_context: web_context,
            flags,
            handlers,
            geometry,
            zoom_factor,
            topmost: params.topmost,
            exit_on_close: params.exit_on_close,
            close_requested: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn webview(&self) -> &WebView {
        &self.webview
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    // ─── Window state ───

    /// Centers the window on the primary monitor.
    pub fn center(&self) {
        center_window(&self.window);
    }

    /// Starts the same close sequence as the window's close button. The
    /// closing handler runs once control returns to the event loop.
    pub fn close(&mut self) {
        self.close_requested = true;
    }

    pub(crate) fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    pub fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    pub fn maximize(&self) {
        self.window.set_maximized(true);
    }

    pub fn is_minimized(&self) -> bool {
        self.window.is_minimized()
    }

    pub fn minimize(&self) {
        self.window.set_minimized(true);
    }

    /// Brings the window back from minimized or hidden and focuses it.
    pub fn restore(&self) {
        self.window.set_minimized(false);
        self.window.set_visible(true);
        self.window.set_focus();
    }

    pub fn position(&self) -> Position {
        current_bounds(&self.window).position
    }

    pub fn set_position(&self, x: i32, y: i32) {
        self.window.set_outer_position(LogicalPosition::new(x, y));
    }

    pub fn size(&self) -> Size {
        current_bounds(&self.window).size
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.window.set_inner_size(LogicalSize::new(width, height));
    }

    pub fn is_resizable(&self) -> bool {
        self.window.is_resizable()
    }

    pub fn set_resizable(&self, resizable: bool) {
        self.window.set_resizable(resizable);
    }

    pub fn title(&self) -> String {
        self.window.title()
    }

    pub fn set_title(&self, title: &str) -> Result<(), InitError> {
        let title = Title::new(title)?;
        self.window.set_title(title.as_str());
        Ok(())
    }

    pub fn is_topmost(&self) -> bool {
        self.topmost
    }

    pub fn set_topmost(&mut self, topmost: bool) {
        self.window.set_always_on_top(topmost);
        self.topmost = topmost;
    }

    pub fn screen_dpi(&self) -> u32 {
        let scale = self.window.scale_factor();
        if scale.is_finite() && scale > 0.0 {
            (scale * f64::from(DEFAULT_DPI)).round() as u32
        } else {
            DEFAULT_DPI
        }
    }

    /// Feeds every connected monitor to `callback` until it returns false.
    pub fn monitors<F>(&self, callback: F) -> usize
    where
        F: FnMut(&MonitorInfo) -> bool,
    {
        visit_monitors(self.monitor_list(), callback)
    }

    #[cfg(target_os = "linux")]
    fn monitor_list(&self) -> Vec<MonitorInfo> {
        platform::webkit::monitors()
    }

    #[cfg(not(target_os = "linux"))]
    fn monitor_list(&self) -> Vec<MonitorInfo> {
        use crate::types::geometry::Rect;
        self.window
            .available_monitors()
            .map(|m| {
                let origin = m.position();
                let size = m.size();
                let rect = Rect {
                    x: origin.x,
                    y: origin.y,
                    width: size.width as i32,
                    height: size.height as i32,
                };
                MonitorInfo { monitor: rect, work: rect }
            })
            .collect()
    }

    // ─── Engine flags ───

    pub fn context_menu_enabled(&self) -> bool {
        self.flags.context_menu_enabled()
    }

    pub fn set_context_menu_enabled(&self, enabled: bool) {
        self.flags.set_context_menu_enabled(enabled);
    }

    pub fn dev_tools_enabled(&self) -> bool {
        self.flags.dev_tools_enabled()
    }

    pub fn set_dev_tools_enabled(&self, enabled: bool) {
        self.flags.set_dev_tools_enabled(enabled);
        #[cfg(target_os = "linux")]
        platform::webkit::set_developer_extras(&self.webview, enabled);
        if !enabled {
            self.webview.close_devtools();
        }
    }

    pub fn grant_browser_permissions(&self) -> bool {
        self.flags.grant_browser_permissions()
    }

    pub fn set_grant_browser_permissions(&self, grant: bool) {
        self.flags.set_grant_browser_permissions(grant);
    }

    // ─── Zoom ───

    /// Reads the engine's zoom level, so zoom changes made by the user
    /// (e.g. Ctrl+scroll) are seen too.
    #[cfg(target_os = "linux")]
    pub fn zoom(&self) -> i32 {
        zoom::factor_to_percent(platform::webkit::zoom_level(&self.webview))
    }

    #[cfg(not(target_os = "linux"))]
    pub fn zoom(&self) -> i32 {
        zoom::factor_to_percent(self.zoom_factor)
    }

    pub fn set_zoom(&mut self, percent: i32) -> Result<(), HostError> {
        if percent <= 0 {
            return Err(InitError::InvalidZoom(percent).into());
        }
        let factor = zoom::percent_to_factor(percent);
        self.webview
            .zoom(factor)
            .map_err(|e| HostError::WebView(e.to_string()))?;
        debug!(from = self.zoom_factor, to = factor, "zoom changed");
        self.zoom_factor = factor;
        Ok(())
    }

    // ─── Navigation and messaging ───

    pub fn navigate_to_url(&self, url: &str) -> Result<(), HostError> {
        self.webview
            .load_url(url)
            .map_err(|e| HostError::WebView(e.to_string()))
    }

    pub fn navigate_to_string(&self, html: &str) -> Result<(), HostError> {
        self.webview
            .load_html(html)
            .map_err(|e| HostError::WebView(e.to_string()))
    }

    /// Delivers `message` to every page callback registered with
    /// `window.external.receiveMessage` and returns once the evaluation
    /// finished. Event-loop thread only: it pumps that loop while waiting.
    ///
    /// Before the first page commit the engine queues the script and
    /// discards its callback; the call then returns without waiting and
    /// the message is delivered once the page commits.
    pub fn send_web_message(&self, message: &str) -> Result<(), HostError> {
        let completion = self.send_web_message_async(message)?;
        #[cfg(target_os = "linux")]
        {
            let iterations = completion.wait_with(platform::webkit::pump_once);
            if completion.was_evaluated() {
                debug!(iterations, "web message delivered");
            } else {
                debug!(iterations, "web message queued until page commit");
            }
        }
        #[cfg(not(target_os = "linux"))]
        drop(completion);
        Ok(())
    }

    /// Schedules delivery of `message` and returns the completion flag
    /// without waiting on it.
    pub fn send_web_message_async(&self, message: &str) -> Result<ScriptCompletion, HostError> {
        let completion = ScriptCompletion::new();
        let resolver = completion.resolver();
        self.webview
            .evaluate_script_with_callback(&script::dispatch_call(message), move |_| {
                resolver.resolve()
            })
            .map_err(|e| HostError::Script(e.to_string()))?;
        Ok(completion)
    }

    // ─── Event loop hooks ───

    pub(crate) fn handle_moved(&mut self, position: PhysicalPosition<i32>) {
        let logical = position.to_logical::<i32>(self.window.scale_factor());
        let change = self
            .geometry
            .observe_position(Position::new(logical.x, logical.y));
        self.notify(change);
    }

    pub(crate) fn handle_resized(&mut self, size: PhysicalSize<u32>) {
        let logical = size.to_logical::<u32>(self.window.scale_factor());
        let change = self
            .geometry
            .observe_size(Size::new(logical.width, logical.height));
        self.notify(change);
    }

    fn notify(&self, change: GeometryChange) {
        if let Some(position) = change.moved {
            self.handlers.moved(position.x, position.y);
        }
        if let Some(size) = change.resized {
            self.handlers.resized(size.width, size.height);
        }
    }

    /// Runs the closing handler. Returns true when the event loop should end.
    pub(crate) fn handle_close_requested(&mut self) -> bool {
        if !self.handlers.closing() {
            info!("close cancelled by handler");
            return false;
        }
        if self.exit_on_close {
            info!("window closing; leaving event loop");
            true
        } else {
            self.window.set_visible(false);
            false
        }
    }
}

fn build_webview(
    window: &Window,
    web_context: &mut WebContext,
    params: &InitParams,
    handlers: &Rc<WindowHandlers>,
) -> Result<WebView, HostError> {
    let ipc_handlers = Rc::clone(handlers);
    let mut builder = WebViewBuilder::new_with_web_context(web_context)
        .with_initialization_script_for_main_only(BOOTSTRAP_SCRIPT, false)
        .with_ipc_handler(move |request: Request<String>| {
            ipc_handlers.message_received(request.body());
        })
        .with_devtools(params.dev_tools_enabled)
        .with_clipboard(true);

    for scheme in &params.custom_scheme_names {
        let scheme_handlers = Rc::clone(handlers);
        let name = scheme.clone();
        builder = builder.with_custom_protocol(scheme.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            debug!(scheme = %name, %uri, "custom scheme request");
            into_http_response(scheme_handlers.scheme_requested(&uri))
        });
    }

    builder = match params.start_content() {
        Some(StartContent::Url(url)) => builder.with_url(url),
        Some(StartContent::Html(html)) => builder.with_html(html),
        None => return Err(InitError::MissingStartContent.into()),
    };

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| HostError::Window("window has no GTK container".to_string()))?;
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window);

    webview.map_err(|e| HostError::WebView(e.to_string()))
}

fn into_http_response(response: SchemeResponse) -> Response<Cow<'static, [u8]>> {
    let status = response.status;
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, response.content_type)
        .body(Cow::Owned(response.body))
        .unwrap_or_else(|e| {
            warn!(%e, status, "invalid custom scheme response");
            let mut fallback = Response::new(Cow::Borrowed(&[][..]));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

fn current_bounds(window: &Window) -> Bounds {
    let scale = window.scale_factor();
    let position = window
        .outer_position()
        .map(|p| p.to_logical::<i32>(scale))
        .unwrap_or_else(|_| LogicalPosition::new(0, 0));
    let size = window.inner_size().to_logical::<u32>(scale);
    Bounds::new(position.x, position.y, size.width, size.height)
}

fn center_window(window: &Window) {
    let Some(monitor) = window.primary_monitor().or_else(|| window.current_monitor()) else {
        warn!("no monitor to center on");
        return;
    };
    let screen = monitor.size();
    let origin = monitor.position();
    let outer = window.outer_size();
    let x = origin.x + (screen.width as i32 - outer.width as i32) / 2;
    let y = origin.y + (screen.height as i32 - outer.height as i32) / 2;
    window.set_outer_position(PhysicalPosition::new(x, y));
}
