//! Host-supplied callbacks, injected once at construction.
//!
//! All handlers run on the event-loop thread. A handler that was never
//! installed is a no-op.

use crate::types::scheme::SchemeResponse;

pub type MessageHandler = Box<dyn Fn(&str)>;
pub type ResizedHandler = Box<dyn Fn(u32, u32)>;
pub type MovedHandler = Box<dyn Fn(i32, i32)>;
/// Returns true to cancel the close.
pub type ClosingHandler = Box<dyn Fn() -> bool>;
pub type SchemeHandler = Box<dyn Fn(&str) -> SchemeResponse>;

#[derive(Default)]
pub struct WindowHandlers {
    on_message: Option<MessageHandler>,
    on_resized: Option<ResizedHandler>,
    on_moved: Option<MovedHandler>,
    on_closing: Option<ClosingHandler>,
    on_scheme_request: Option<SchemeHandler>,
}

impl WindowHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_message(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_message = Some(Box::new(f));
        self
    }

    pub fn on_resized(mut self, f: impl Fn(u32, u32) + 'static) -> Self {
        self.on_resized = Some(Box::new(f));
        self
    }

    pub fn on_moved(mut self, f: impl Fn(i32, i32) + 'static) -> Self {
        self.on_moved = Some(Box::new(f));
        self
    }

    pub fn on_closing(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.on_closing = Some(Box::new(f));
        self
    }

    pub fn on_scheme_request(mut self, f: impl Fn(&str) -> SchemeResponse + 'static) -> Self {
        self.on_scheme_request = Some(Box::new(f));
        self
    }

    pub fn message_received(&self, message: &str) {
        if let Some(f) = &self.on_message {
            f(message);
        }
    }

    pub fn resized(&self, width: u32, height: u32) {
        if let Some(f) = &self.on_resized {
            f(width, height);
        }
    }

    pub fn moved(&self, x: i32, y: i32) {
        if let Some(f) = &self.on_moved {
            f(x, y);
        }
    }

    /// True when the close should go ahead.
    pub fn closing(&self) -> bool {
        self.on_closing.as_ref().map_or(true, |f| !f())
    }

    pub fn scheme_requested(&self, uri: &str) -> SchemeResponse {
        match &self.on_scheme_request {
            Some(f) => f(uri),
            None => SchemeResponse::not_found(),
        }
    }
}
