use std::sync::atomic::AtomicUsize;

use super::*;

fn recorder(store: &SessionStore) -> Arc<Mutex<Vec<Session>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |session| sink.lock().unwrap().push(session.clone()));
    seen
}

#[test]
fn fresh_store_is_empty() {
    let store = SessionStore::in_memory();
    assert_eq!(store.get(), Session::default());
}

#[test]
fn set_then_get_returns_both_fields() {
    let store = SessionStore::in_memory();
    store.set("tok", "user");
    assert_eq!(store.get(), Session::new("tok", "user"));
}

#[test]
fn last_write_wins_without_merging() {
    let store = SessionStore::in_memory();
    store.set("tok", "user");
    store.set("tok2", "admin");
    assert_eq!(store.get(), Session::new("tok2", "admin"));
}

#[test]
fn clear_removes_both_fields() {
    let store = SessionStore::in_memory();
    store.set("tok", "owner");
    store.clear();
    let session = store.get();
    assert_eq!(session.token, None);
    assert_eq!(session.role, None);
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore::in_memory();
    store.clear();
    store.clear();
    assert_eq!(store.get(), Session::default());
}

#[test]
fn store_persists_across_instances_on_same_storage() {
    let storage = MemoryStorage::default();
    let first = SessionStore::new(Arc::new(storage.clone()));
    first.set("tok", "admin");
    drop(first);

    let reloaded = SessionStore::new(Arc::new(storage));
    assert_eq!(reloaded.get(), Session::new("tok", "admin"));
}

#[test]
fn writes_use_well_known_keys() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(Arc::new(storage.clone()));
    store.set("abc", "owner");
    assert_eq!(storage.get_raw("token").as_deref(), Some("abc"));
    assert_eq!(storage.get_raw("role").as_deref(), Some("owner"));
}

#[test]
fn tampered_role_is_read_back_verbatim() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(Arc::new(storage.clone()));
    store.set("abc", "user");
    storage.insert_raw(ROLE_KEY, "superadmin");
    assert_eq!(store.get().role.as_deref(), Some("superadmin"));
    assert_eq!(store.get().role(), None);
}

#[test]
fn set_and_clear_notify_subscribers_in_order() {
    let store = SessionStore::in_memory();
    let seen = recorder(&store);

    store.set("tok", "user");
    store.clear();

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![Session::new("tok", "user"), Session::default()]);
}

#[test]
fn clones_share_subscribers() {
    let store = SessionStore::in_memory();
    let seen = recorder(&store);
    store.clone().set("tok", "admin");
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = SessionStore::in_memory();
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set("a", "user");
    assert!(store.unsubscribe(id));
    store.set("b", "user");

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!store.unsubscribe(id));
}

#[test]
fn listener_may_read_the_store_during_notification() {
    let store = SessionStore::in_memory();
    let reader = store.clone();
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.get()));

    store.set("tok", "owner");
    assert_eq!(*observed.lock().unwrap(), Some(Session::new("tok", "owner")));
}

#[test]
fn logout_in_one_view_reaches_other_view_once() {
    let storage = MemoryStorage::default();
    let tab_a = SessionStore::new(Arc::new(storage.clone()));
    let tab_b = SessionStore::new(Arc::new(storage));
    tab_a.set("tok", "user");

    let seen_a = recorder(&tab_a);
    let seen_b = recorder(&tab_b);
    tab_a.clear();

    assert_eq!(*seen_a.lock().unwrap(), vec![Session::default()]);
    assert_eq!(*seen_b.lock().unwrap(), vec![Session::default()]);
    assert_eq!(tab_b.get(), Session::default());
}

#[test]
fn login_in_other_view_is_observed() {
    let storage = MemoryStorage::default();
    let tab_a = SessionStore::new(Arc::new(storage.clone()));
    let tab_b = SessionStore::new(Arc::new(storage));
    let seen_b = recorder(&tab_b);

    tab_a.set("tok", "admin");

    assert_eq!(*seen_b.lock().unwrap(), vec![Session::new("tok", "admin")]);
}

#[test]
fn dropped_view_no_longer_receives_changes() {
    let storage = MemoryStorage::default();
    let tab_a = SessionStore::new(Arc::new(storage.clone()));
    let tab_b = SessionStore::new(Arc::new(storage));
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    tab_b.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    drop(tab_b);

    tab_a.set("tok", "user");
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn storage_event_filter_matches_session_keys_and_full_clear() {
    assert!(is_session_key(Some("token")));
    assert!(is_session_key(Some("role")));
    assert!(is_session_key(None));
    assert!(!is_session_key(Some("theme")));
}

// =============================================================
// Write order
// =============================================================

fn apply(entries: &mut HashMap<String, String>, write: KeyWrite<'_>) {
    match write {
        KeyWrite::Set(key, value) => {
            entries.insert(key.to_owned(), value.to_owned());
        }
        KeyWrite::Remove(key) => {
            entries.remove(key);
        }
    }
}

fn snapshot(entries: &HashMap<String, String>) -> Session {
    Session { token: entries.get(TOKEN_KEY).cloned(), role: entries.get(ROLE_KEY).cloned() }
}

/// Every state a reader can observe between steps is either logged out or
/// the complete new session.
fn assert_no_mixed_state(initial: &[(&str, &str)], entry: Option<(&str, &str)>) {
    let mut entries: HashMap<String, String> =
        initial.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    let target = entry.map_or_else(Session::default, |(token, role)| Session::new(token, role));

    for write in batch_writes(entry).into_iter().flatten() {
        apply(&mut entries, write);
        let seen = snapshot(&entries);
        assert!(seen.role().is_none() || seen == target, "mixed state after {write:?}: {seen:?}");
    }
    assert_eq!(snapshot(&entries), target);
}

#[test]
fn overwrite_never_pairs_old_token_with_new_role() {
    assert_no_mixed_state(&[(TOKEN_KEY, "A"), (ROLE_KEY, "superadmin")], Some(("B", "admin")));
    assert_no_mixed_state(&[(TOKEN_KEY, "A"), (ROLE_KEY, "user")], Some(("B", "owner")));
}

#[test]
fn first_login_and_logout_pass_only_through_logged_out_states() {
    assert_no_mixed_state(&[], Some(("tok", "user")));
    assert_no_mixed_state(&[(TOKEN_KEY, "tok"), (ROLE_KEY, "admin")], None);
}

#[test]
fn token_is_removed_first_and_written_last() {
    let writes: Vec<KeyWrite<'_>> = batch_writes(Some(("tok", "owner"))).into_iter().flatten().collect();
    assert_eq!(writes.first(), Some(&KeyWrite::Remove(TOKEN_KEY)));
    assert_eq!(writes.last(), Some(&KeyWrite::Set(TOKEN_KEY, "tok")));

    let clears: Vec<KeyWrite<'_>> = batch_writes(None).into_iter().flatten().collect();
    assert_eq!(clears, vec![KeyWrite::Remove(TOKEN_KEY), KeyWrite::Remove(ROLE_KEY)]);
}

// =============================================================
// Relay lifetime
// =============================================================

#[test]
fn relay_is_removed_with_last_clone() {
    let storage = MemoryStorage::default();
    let tab_a = SessionStore::new(Arc::new(storage.clone()));
    let tab_b = SessionStore::new(Arc::new(storage.clone()));
    assert_eq!(storage.watcher_count(), 2);

    let tab_b_clone = tab_b.clone();
    drop(tab_b);
    assert_eq!(storage.watcher_count(), 2);

    drop(tab_b_clone);
    assert_eq!(storage.watcher_count(), 1);

    drop(tab_a);
    assert_eq!(storage.watcher_count(), 0);
}

#[test]
fn remounted_views_do_not_accumulate_relays() {
    let storage = MemoryStorage::default();
    for _ in 0..5 {
        let view = SessionStore::new(Arc::new(storage.clone()));
        view.set("tok", "user");
    }
    assert_eq!(storage.watcher_count(), 0);
}
