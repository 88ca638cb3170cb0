pub mod api;
pub mod endpoints;
pub mod form;
pub mod format;
pub mod list_query;
pub mod stats;
