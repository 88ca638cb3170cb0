pub mod config;
pub mod data;
pub mod format;
pub mod logging;
pub mod request_logger;
pub mod state;
