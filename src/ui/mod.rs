//! webframe UI layer.
//!
//! Uses `tao` for the window and event loop and `wry` for the web view:
//! - Linux: WebKitGTK, with extra engine hooks in `platform::webkit`
//! - macOS: WKWebView
//! - Windows: WebView2
//!
//! The page talks to the host through the bootstrap script in
//! `bridge::script`; other threads talk to it through `Dispatcher`.

pub mod fatal;
pub mod flags;
pub mod handlers;
pub mod host;
pub mod runtime;
