//! HTTP request handlers for API endpoints.

pub mod calculate;
pub mod history;
pub mod root;

pub use calculate::calculate_handler;
pub use history::history_handler;
pub use root::root_handler;
