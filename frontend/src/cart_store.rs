//! `localStorage` persistence for the shopping cart. The stored shape is the
//! serde JSON of [`Cart`]; anything unreadable loads as an empty cart.

use tatvapada_shared::Cart;

const STORAGE_KEY: &str = "tatvapada.cart.v1";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Loads the persisted cart; missing or corrupt JSON yields an empty cart.
pub fn load() -> Cart {
    let Some(storage) = storage() else {
        return Cart::default();
    };
    let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) else {
        return Cart::default();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Persists the cart, overwriting any previous value. Storage errors (quota,
/// disabled storage) are logged and otherwise ignored; the in-memory cart
/// remains authoritative for the session.
pub fn save(cart: &Cart) {
    let Some(storage) = storage() else {
        return;
    };
    match serde_json::to_string(cart) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &raw) {
                web_sys::console::error_1(&format!("cart: persist failed: {e:?}").into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("cart: serialize failed: {e}").into());
        }
    }
}

/// Drops the persisted cart (after checkout).
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
