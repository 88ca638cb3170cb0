//! API base URL resolution.

use contracts::shared::endpoints::Endpoints;

use crate::shared::session;

/// Base URL for API requests.
///
/// `localStorage["base_url"]` wins when set; otherwise the current host on port 3000,
/// e.g. `http://localhost:3000`.
pub fn api_base() -> String {
    if let Some(base) = session::base_url_override() {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(&api_base())
}
