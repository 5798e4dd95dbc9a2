pub mod clipboard;
pub mod source;
