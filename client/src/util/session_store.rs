//! Durable session storage with change notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session (token + role) lives in browser `localStorage` under two fixed
//! keys so it survives reloads. `SessionStore` is the only writer: login
//! success calls `set`, logout calls `clear`. Every mutation is published to
//! the subscribers of the writing view, and the storage backend relays changes
//! made by other views (other tabs) through `watch`.
//!
//! DESIGN
//! ======
//! `SessionStorage` abstracts the backend. `BrowserStorage` talks to
//! `localStorage` and the window `storage` event (hydrate only);
//! `MemoryStorage` emulates the same semantics in-process for SSR and tests,
//! including "changes are announced to every view except the writer".

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::state::session::Session;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the role tag.
pub const ROLE_KEY: &str = "role";

/// Identifies one live store instance (one tab / one view).
pub type ViewId = u64;
/// Handle returned by `SessionStore::subscribe`.
pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;
type ExternalChange = Arc<dyn Fn() + Send + Sync>;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Backend holding the two session keys.
pub trait SessionStorage: Send + Sync {
    /// Read both keys.
    fn load(&self) -> Session;

    /// Write `(token, role)`, or remove both keys when `entry` is `None`.
    /// Both keys change together; readers never see one without the other.
    fn save(&self, origin: ViewId, entry: Option<(&str, &str)>);

    /// Register `on_change` for mutations made by views other than `view`.
    fn watch(&self, view: ViewId, on_change: ExternalChange);

    /// Drop the registration made by `watch` for `view`.
    fn unwatch(&self, view: ViewId);
}

// =============================================================================
// WRITE ORDER
// =============================================================================

/// One key operation of a session batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyWrite<'a> {
    Set(&'static str, &'a str),
    Remove(&'static str),
}

/// Key operations for a batch, in the order they must be applied.
///
/// The token is removed first and written last, so a reader that observes
/// the storage between two steps never sees a token paired with a role it
/// was not stored with.
pub fn batch_writes<'a>(entry: Option<(&'a str, &'a str)>) -> [Option<KeyWrite<'a>>; 3] {
    match entry {
        Some((token, role)) => [
            Some(KeyWrite::Remove(TOKEN_KEY)),
            Some(KeyWrite::Set(ROLE_KEY, role)),
            Some(KeyWrite::Set(TOKEN_KEY, token)),
        ],
        None => [Some(KeyWrite::Remove(TOKEN_KEY)), Some(KeyWrite::Remove(ROLE_KEY)), None],
    }
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

/// In-process storage shared by every `SessionStore` built on a clone of it.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    entries: Mutex<HashMap<String, String>>,
    watchers: Mutex<Vec<(ViewId, ExternalChange)>>,
}

impl MemoryStorage {
    /// Write a raw key the way any other script in the page could.
    pub fn insert_raw(&self, key: &str, value: &str) {
        lock(&self.inner.entries).insert(key.to_owned(), value.to_owned());
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        lock(&self.inner.entries).get(key).cloned()
    }

    /// Views currently registered for change relays.
    pub fn watcher_count(&self) -> usize {
        lock(&self.inner.watchers).len()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Session {
        let entries = lock(&self.inner.entries);
        Session { token: entries.get(TOKEN_KEY).cloned(), role: entries.get(ROLE_KEY).cloned() }
    }

    fn save(&self, origin: ViewId, entry: Option<(&str, &str)>) {
        {
            // Applied under one lock, so in-process readers see the batch whole.
            let mut entries = lock(&self.inner.entries);
            for write in batch_writes(entry).into_iter().flatten() {
                match write {
                    KeyWrite::Set(key, value) => {
                        entries.insert(key.to_owned(), value.to_owned());
                    }
                    KeyWrite::Remove(key) => {
                        entries.remove(key);
                    }
                }
            }
        }

        let others: Vec<ExternalChange> = lock(&self.inner.watchers)
            .iter()
            .filter(|(view, _)| *view != origin)
            .map(|(_, on_change)| Arc::clone(on_change))
            .collect();
        for on_change in others {
            on_change();
        }
    }

    fn watch(&self, view: ViewId, on_change: ExternalChange) {
        lock(&self.inner.watchers).push((view, on_change));
    }

    fn unwatch(&self, view: ViewId) {
        lock(&self.inner.watchers).retain(|(existing, _)| *existing != view);
    }
}

// =============================================================================
// BROWSER BACKEND
// =============================================================================

/// `localStorage` backend. The browser fires `storage` events only in other
/// tabs, which matches the `watch` contract directly.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
type StorageListener = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>;

#[cfg(feature = "hydrate")]
thread_local! {
    /// Window `storage` listeners by view, removed again in `unwatch`.
    static STORAGE_LISTENERS: std::cell::RefCell<HashMap<ViewId, StorageListener>> =
        std::cell::RefCell::new(HashMap::new());
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn load(&self) -> Session {
        let Some(storage) = local_storage() else {
            return Session::default();
        };
        Session {
            token: storage.get_item(TOKEN_KEY).ok().flatten(),
            role: storage.get_item(ROLE_KEY).ok().flatten(),
        }
    }

    fn save(&self, _origin: ViewId, entry: Option<(&str, &str)>) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session not persisted");
            return;
        };
        // Other tabs see each step as its own `storage` event.
        for write in batch_writes(entry).into_iter().flatten() {
            let (key, result) = match write {
                KeyWrite::Set(key, value) => (key, storage.set_item(key, value)),
                KeyWrite::Remove(key) => (key, storage.remove_item(key)),
            };
            if result.is_err() {
                log::warn!("localStorage write of {key} failed");
                return;
            }
        }
    }

    fn watch(&self, view: ViewId, on_change: ExternalChange) {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = StorageListener::new(move |ev: web_sys::StorageEvent| {
            if is_session_key(ev.key().as_deref()) {
                on_change();
            }
        });
        if window
            .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach storage listener; other tabs will not sync");
            return;
        }
        STORAGE_LISTENERS.with(|listeners| listeners.borrow_mut().insert(view, listener));
    }

    fn unwatch(&self, view: ViewId) {
        use wasm_bindgen::JsCast;

        let Some(listener) = STORAGE_LISTENERS.with(|listeners| listeners.borrow_mut().remove(&view)) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback("storage", listener.as_ref().unchecked_ref());
        }
    }
}

/// Whether a `storage` event key concerns the session. A `None` key means
/// the whole storage was cleared.
#[cfg(any(test, feature = "hydrate"))]
fn is_session_key(key: Option<&str>) -> bool {
    matches!(key, None | Some(TOKEN_KEY | ROLE_KEY))
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Default)]
struct Subscribers {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
}

impl Subscribers {
    fn publish(&self, session: &Session) {
        // Snapshot first: listeners may read the store or subscribe again.
        let listeners: Vec<Listener> = lock(&self.listeners).iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(session);
        }
    }
}

/// Process-wide session store for one view. Clones share subscribers; the
/// change relay from other views is dropped with the last clone.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    storage: Arc<dyn SessionStorage>,
    view: ViewId,
    subscribers: Subscribers,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        self.storage.unwatch(self.view);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("view", &self.inner.view).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store over `storage` and start relaying changes from other views.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let view = NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::new(StoreInner { storage, view, subscribers: Subscribers::default() });

        let weak: Weak<StoreInner> = Arc::downgrade(&inner);
        inner.storage.watch(
            view,
            Arc::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                log::debug!("session changed in another view");
                inner.subscribers.publish(&inner.storage.load());
            }),
        );

        Self { inner }
    }

    /// Store backed by a fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Store backed by `localStorage` in the browser, in-memory elsewhere.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    pub fn get(&self) -> Session {
        self.inner.storage.load()
    }

    /// Overwrite both fields, then notify.
    pub fn set(&self, token: &str, role: &str) {
        self.inner.storage.save(self.inner.view, Some((token, role)));
        log::debug!("session stored (role={role})");
        self.inner.subscribers.publish(&self.get());
    }

    /// Remove both fields, then notify. Idempotent.
    pub fn clear(&self) {
        self.inner.storage.save(self.inner.view, None);
        log::debug!("session cleared");
        self.inner.subscribers.publish(&self.get());
    }

    /// Register `listener` for every session change seen by this view.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) -> SubscriptionId {
        let subscribers = &self.inner.subscribers;
        let id = subscribers.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&subscribers.listeners).push((id, Arc::new(listener)));
        id
    }

    /// Drop a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = lock(&self.inner.subscribers.listeners);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
