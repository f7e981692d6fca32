//! Page-side half of the message channel.
//!
//! `BOOTSTRAP_SCRIPT` is injected at document start into every frame. It
//! exposes `window.external.sendMessage` (page → host, over the engine's
//! `ipc` message handler) and `window.external.receiveMessage` (host →
//! page, fed by `__dispatchMessageCallback`).

/// Page-global function that fans a host message out to every callback
/// registered through `window.external.receiveMessage`.
pub const DISPATCH_FUNCTION: &str = "__dispatchMessageCallback";

/// Name of the engine message handler the page posts to. WebKit exposes
/// it to every frame as `window.webkit.messageHandlers.ipc`; `window.ipc`
/// only exists in the main frame.
///
/// The engine stringifies whatever reaches the handler, so the host
/// cannot tell a string from another value. The string-only rule is
/// enforced by `sendMessage` in the page.
pub const IPC_HANDLER_NAME: &str = "ipc";

pub const BOOTSTRAP_SCRIPT: &str = r#"window.__receiveMessageCallbacks = [];
window.__dispatchMessageCallback = function (message) {
  window.__receiveMessageCallbacks.forEach(function (callback) { callback(message); });
};
window.external = {
  sendMessage: function (message) {
    if (typeof message !== 'string') { return; }
    var handlers = window.webkit && window.webkit.messageHandlers;
    if (handlers && handlers.ipc) {
      handlers.ipc.postMessage(message);
    } else {
      window.ipc.postMessage(message);
    }
  },
  receiveMessage: function (callback) {
    window.__receiveMessageCallbacks.push(callback);
  }
};"#;

/// Encodes `message` as a double-quoted JSON string literal, which is
/// also a valid JavaScript string literal.
pub fn quote_message(message: &str) -> String {
    serde_json::Value::String(message.to_owned()).to_string()
}

/// Builds the script that delivers `message` to the page.
pub fn dispatch_call(message: &str) -> String {
    format!("{}({})", DISPATCH_FUNCTION, quote_message(message))
}
