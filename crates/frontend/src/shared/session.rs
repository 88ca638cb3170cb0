//! Browser-storage session: the values the dashboard reads on every request.

use web_sys::window;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const LOGO_KEY: &str = "logo";
const BASE_URL_KEY: &str = "base_url";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected key '{}'", key);
        }
    }
}

pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn save_token(token: &str) {
    write(TOKEN_KEY, token.trim());
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

pub fn username() -> Option<String> {
    read(USERNAME_KEY)
}

pub fn logo() -> Option<String> {
    read(LOGO_KEY)
}

pub fn base_url_override() -> Option<String> {
    read(BASE_URL_KEY)
}
