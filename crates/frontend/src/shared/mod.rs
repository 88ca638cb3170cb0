pub mod api;
pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_page;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod session;
pub mod toast;
