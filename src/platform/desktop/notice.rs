use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Modal error box; returns once the user dismisses it.
pub fn show_blocking_notice(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
