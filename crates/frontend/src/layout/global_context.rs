use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::session;

/// Key of the overview page; every other key is an entity path segment.
pub const DASHBOARD_KEY: &str = "dashboard";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Page shown in the center area.
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    /// Whether a session token is present in storage.
    pub has_token: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DASHBOARD_KEY.to_string()),
            left_open: RwSignal::new(true),
            has_token: RwSignal::new(session::token().is_some()),
        }
    }

    /// Reads `?active=` once and mirrors later page changes back into the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_query(&search) {
            self.open_page(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get();
            let new_url = query_for_active(&key);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open page '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn sign_in(&self, token: &str) {
        session::save_token(token);
        self.has_token.set(session::token().is_some());
    }

    pub fn sign_out(&self) {
        session::clear_token();
        self.has_token.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

fn query_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_key_is_read_from_query() {
        assert_eq!(active_from_query("?active=raw-material"), Some("raw-material".to_string()));
        assert_eq!(active_from_query("?other=1"), None);
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
    }

    #[test]
    fn query_round_trips() {
        let query = query_for_active("quality-control");
        assert_eq!(query, "?active=quality-control");
        assert_eq!(active_from_query(&query), Some("quality-control".to_string()));
    }
}
