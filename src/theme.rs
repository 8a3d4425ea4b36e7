//! Theme Preference
//!
//! The dark-mode flag persisted in `localStorage`.

use leptos::prelude::window;

pub const DARK_MODE_KEY: &str = "isDark";

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

/// Read the saved flag; missing storage or value means light mode
pub fn load_dark_mode() -> bool {
    let saved = storage().and_then(|s| s.get_item(DARK_MODE_KEY).ok().flatten());
    parse_flag(saved.as_deref())
}

pub fn save_dark_mode(is_dark: bool) {
    let Some(storage) = storage() else {
        log::warn!("[THEME] localStorage unavailable, preference not saved");
        return;
    };
    if storage.set_item(DARK_MODE_KEY, flag_value(is_dark)).is_err() {
        log::warn!("[THEME] failed to save {}", DARK_MODE_KEY);
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

fn flag_value(is_dark: bool) -> &'static str {
    if is_dark { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_literal_true_enables_dark_mode() {
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("TRUE")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_flag_serialized_as_literal_strings() {
        assert_eq!(flag_value(true), "true");
        assert_eq!(flag_value(false), "false");
        assert!(parse_flag(Some(flag_value(true))));
    }
}
