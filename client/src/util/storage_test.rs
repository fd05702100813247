use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("user", "{}").unwrap();
    assert_eq!(store.get("user").as_deref(), Some("{}"));
}

#[test]
fn memory_store_missing_key_reads_none() {
    assert_eq!(MemoryStore::new().get("user"), None);
}

#[test]
fn memory_store_remove_only_drops_that_key() {
    let store = MemoryStore::new();
    store.set("user", "a").unwrap();
    store.set("theme", "dark").unwrap();
    store.remove("user");
    assert_eq!(store.get("user"), None);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_store_clear_drops_everything() {
    let store = MemoryStore::new();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let view = store.clone();
    store.set("user", "x").unwrap();
    assert_eq!(view.get("user").as_deref(), Some("x"));
    assert_eq!(view.len(), 1);
}

#[test]
fn storage_set_memory_stores_are_independent() {
    let set = StorageSet::memory();
    set.durable.set("user", "d").unwrap();
    assert_eq!(set.shared.get("user"), None);
    assert_eq!(set.scratch.get("user"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_set_browser_falls_back_to_memory_off_wasm() {
    let set = StorageSet::browser();
    set.shared.set("user", "s").unwrap();
    assert_eq!(set.shared.get("user").as_deref(), Some("s"));
}

// =============================================================
// Cookies
// =============================================================

#[test]
fn cookie_value_finds_and_decodes_named_entry() {
    let header = "theme=dark; user=%7B%22id%22%3A1%7D; other=1";
    assert_eq!(cookie_value(header, "user").as_deref(), Some(r#"{"id":1}"#));
}

#[test]
fn cookie_value_does_not_match_prefix() {
    assert_eq!(cookie_value("username=bob", "user"), None);
}

#[test]
fn cookie_value_missing_returns_none() {
    assert_eq!(cookie_value("", "user"), None);
}

#[test]
fn cookie_value_keeps_equals_inside_value() {
    assert_eq!(cookie_value("token=a=b", "token").as_deref(), Some("a=b"));
}

#[test]
fn cookie_names_lists_every_key() {
    assert_eq!(cookie_names("a=1; b=2;c=3"), vec!["a", "b", "c"]);
    assert!(cookie_names("").is_empty());
}

#[test]
fn session_cookie_is_site_wide_and_lax() {
    let written = session_cookie("user", "{}");
    assert!(written.starts_with("user="), "{written}");
    assert!(written.contains("Path=/"), "{written}");
    assert!(written.contains("SameSite=Lax"), "{written}");
    assert!(!written.contains("Max-Age"), "{written}");
}

#[test]
fn session_cookie_value_reads_back_unchanged() {
    let record = r#"{"token":"t; x","userInfo":{"id":1,"role":"admin"}}"#;
    let written = session_cookie("user", record);
    assert_eq!(cookie_value(&written, "user").as_deref(), Some(record));
}

#[test]
fn removal_cookie_expires_immediately() {
    let written = removal_cookie("user");
    assert!(written.starts_with("user=;"), "{written}");
    assert!(written.contains("Path=/"), "{written}");
    assert!(written.contains("Max-Age=0"), "{written}");
}
