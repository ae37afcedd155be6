//! The locally persisted session marker.
//!
//! A [`SessionUser`] JSON blob under a fixed localStorage key is the
//! client's whole notion of "signed in". The route guards check presence
//! only; the backend session cookie remains the actual authority, so a
//! dead server session is discovered on the next failing request, not
//! here.

use gloo_storage::{LocalStorage, Storage};
use shared::models::SessionUser;

/// Storage key the session marker lives under.
pub const STORAGE_KEY: &str = "user";

/// Persist the signed-in user after a successful login.
pub fn store(user: &SessionUser) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, user) {
        log::error!("failed to persist session marker: {err}");
    }
}

/// The stored session user, if any.
#[must_use]
pub fn load() -> Option<SessionUser> {
    LocalStorage::get(STORAGE_KEY).ok()
}

/// Whether a session marker is present. Presence is the whole check; the
/// content is not validated.
#[must_use]
pub fn is_authenticated() -> bool {
    LocalStorage::raw()
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .is_some()
}

/// Drop the session marker on logout.
pub fn clear() {
    LocalStorage::delete(STORAGE_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn store_load_clear_round_trip() {
        let user = SessionUser {
            name: "Jamie Park".to_string(),
            email: "jamie@example.com".to_string(),
        };

        store(&user);
        assert!(is_authenticated());
        assert_eq!(load(), Some(user));

        clear();
        assert!(!is_authenticated());
        assert_eq!(load(), None);
    }

    #[wasm_bindgen_test]
    fn absent_marker_means_unauthenticated() {
        clear();
        assert!(!is_authenticated());
    }
}
