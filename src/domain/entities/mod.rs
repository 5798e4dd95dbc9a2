pub mod filter;
pub mod record;
pub mod result_view;
