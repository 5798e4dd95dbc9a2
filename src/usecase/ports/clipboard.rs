#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
