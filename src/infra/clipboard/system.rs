use std::sync::Mutex;

use crate::usecase::ports::clipboard::{ClipboardError, ClipboardSink};

/// OS clipboard through `arboard`.
///
/// The handle is opened lazily and kept for the whole session; on X11 the
/// copied text only stays available while the owning handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            *guard = Some(clipboard);
        }
        let Some(clipboard) = guard.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not opened".to_string()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Rejected(err.to_string()))
    }
}
