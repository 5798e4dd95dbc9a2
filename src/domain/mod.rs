pub mod entities;
pub mod format;
