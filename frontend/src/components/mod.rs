pub mod crash_form;
pub mod handlers;
pub mod header;
pub mod popup;
pub mod utils;
