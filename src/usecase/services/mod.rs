pub mod copy_service;
pub mod load_service;
pub mod lookup_service;
pub mod session;
