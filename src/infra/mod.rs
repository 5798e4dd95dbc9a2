pub mod clipboard;
pub mod json;
