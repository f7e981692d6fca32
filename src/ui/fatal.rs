// Blocking notice dialogs for the two places the host talks to the user
// directly: fatal misuse at startup and granted permission requests.

use std::fmt::Display;

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::{error, warn};

/// Shows `err` in a blocking error dialog, then exits the process.
pub fn abort_with_dialog(title: &str, err: &dyn Display) -> ! {
    error!(%err, "fatal startup error");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
    std::process::exit(0);
}

/// Blocking notice shown before a permission request is granted.
pub fn permission_notice() {
    warn!("web content requested a permission; allowing");
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Permission requested")
        .set_description("Permission Requested - Allowing!")
        .set_buttons(MessageButtons::Ok)
        .show();
}
