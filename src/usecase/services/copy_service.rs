use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::entities::result_view::ResultView;
use crate::usecase::ports::clipboard::{ClipboardError, ClipboardSink};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";

/// Copy button label. Each copy starts a new generation; only the timer of the
/// latest generation may revert the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    label: &'static str,
    generation: u64,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self {
            label: COPY_LABEL,
            generation: 0,
        }
    }
}

impl CopyFeedback {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.label = COPIED_LABEL;
        self.generation
    }

    /// Reverts the label when `generation` is still the latest copy.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.label = COPY_LABEL;
        true
    }
}

#[derive(Clone)]
pub struct CopyService {
    clipboard: Rc<dyn ClipboardSink>,
}

impl CopyService {
    pub fn new(clipboard: Rc<dyn ClipboardSink>) -> Self {
        Self { clipboard }
    }

    /// Copies the visible text of `view`; an empty string when nothing is rendered.
    /// Returns the number of characters written.
    pub fn copy_view(&self, view: Option<&ResultView>) -> Result<usize, ClipboardError> {
        let text = view.map(ResultView::to_plain_text).unwrap_or_default();
        match self.clipboard.write_text(&text) {
            Ok(()) => {
                let copied = text.chars().count();
                info!(chars = copied, "copied result to clipboard");
                Ok(copied)
            }
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                Err(err)
            }
        }
    }
}
