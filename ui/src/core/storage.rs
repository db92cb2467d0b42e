//! Best-effort persistence for site preferences.
//!
//! The only durable value this site keeps is the locale key. Web builds go
//! through `localStorage`; native builds (tests, tooling) use a
//! process-local map so the same API round-trips without a browser.

#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
static LOCAL: Lazy<Mutex<BTreeMap<String, String>>> = Lazy::new(|| Mutex::new(BTreeMap::new()));

/// Read a stored value. Any failure (no window, storage blocked, missing
/// key) comes back as `None` and callers fall back to their default.
#[cfg(target_arch = "wasm32")]
pub fn read(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read(key: &str) -> Option<String> {
    LOCAL.lock().ok()?.get(key).cloned()
}

/// Write a stored value. Persistence is best-effort: callers log the error
/// and carry on with their in-memory state.
#[cfg(target_arch = "wasm32")]
pub fn write(key: &str, value: &str) -> Result<(), String> {
    let storage = web_sys::window()
        .ok_or("window unavailable")?
        .local_storage()
        .map_err(|_| "storage access blocked")?
        .ok_or("storage unavailable")?;
    storage
        .set_item(key, value)
        .map_err(|_| "storage write rejected (quota?)".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write(key: &str, value: &str) -> Result<(), String> {
    let mut map = LOCAL.lock().map_err(|_| "storage lock poisoned".to_string())?;
    map.insert(key.to_string(), value.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        assert_eq!(read("storage-test-missing"), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        write("storage-test-roundtrip", "value").unwrap();
        assert_eq!(read("storage-test-roundtrip"), Some("value".to_string()));

        write("storage-test-roundtrip", "overwritten").unwrap();
        assert_eq!(read("storage-test-roundtrip"), Some("overwritten".to_string()));
    }
}
