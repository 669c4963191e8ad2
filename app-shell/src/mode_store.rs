use inventory_core::Mode;

use crate::storage::{KeyValueStorage, StorageError};

pub type SubscriptionId = usize;

/// Observable holder of the process-wide mode flag.
///
/// Reads the flag once when opened, writes through to storage on `set` and
/// notifies subscribers synchronously. Writes made elsewhere (another tab) are
/// picked up with `sync_from_storage`.
pub struct ModeStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    mode: Mode,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(Mode)>)>,
    next_subscription: SubscriptionId,
}

impl<S: KeyValueStorage> ModeStore<S> {
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = Mode::from_stored(storage.get_item(&key).as_deref());
        Self {
            storage,
            key,
            mode,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist and publish a new mode. Subscribers are notified even when the
    /// storage write fails; the error is returned for the caller to report.
    pub fn set(&mut self, mode: Mode) -> Result<(), StorageError> {
        let written = self.storage.set_item(&self.key, mode.as_str());
        if self.mode != mode {
            self.mode = mode;
            self.notify();
        }
        written
    }

    pub fn subscribe(&mut self, f: impl Fn(Mode) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    /// Re-read the stored flag. Returns true (and notifies) only on change.
    pub fn sync_from_storage(&mut self) -> bool {
        let stored = Mode::from_stored(self.storage.get_item(&self.key).as_deref());
        if stored == self.mode {
            return false;
        }
        self.mode = stored;
        self.notify();
        true
    }

    fn notify(&self) {
        log::debug!("mode -> {}", self.mode.as_str());
        for (_, subscriber) in &self.subscribers {
            subscriber(self.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn opens_with_stored_or_default_mode() {
        let storage = MemoryStorage::new();
        assert_eq!(ModeStore::open(storage.clone(), "mode").mode(), Mode::User);
        storage.set_item("mode", "admin").unwrap();
        assert_eq!(ModeStore::open(storage.clone(), "mode").mode(), Mode::Admin);
        storage.set_item("mode", "root").unwrap();
        assert_eq!(ModeStore::open(storage, "mode").mode(), Mode::User);
    }

    #[test]
    fn set_writes_through_and_notifies() {
        let storage = MemoryStorage::new();
        let mut store = ModeStore::open(storage.clone(), "mode");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |m| sink.borrow_mut().push(m));

        store.set(Mode::Admin).unwrap();
        assert_eq!(storage.get_item("mode").as_deref(), Some("admin"));
        // Same value: stored again, but no duplicate notification.
        store.set(Mode::Admin).unwrap();
        store.set(Mode::User).unwrap();
        assert_eq!(*seen.borrow(), vec![Mode::Admin, Mode::User]);
    }

    #[test]
    fn unsubscribed_listeners_stay_quiet() {
        let mut store = ModeStore::open(MemoryStorage::new(), "mode");
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = store.subscribe(move |_| *c.borrow_mut() += 1);
        store.set(Mode::Admin).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(Mode::User).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn sync_picks_up_foreign_writes() {
        let storage = MemoryStorage::new();
        let mut here = ModeStore::open(storage.clone(), "mode");
        let mut other_tab = ModeStore::open(storage, "mode");
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        here.subscribe(move |m| *sink.borrow_mut() = Some(m));

        other_tab.set(Mode::Admin).unwrap();
        assert_eq!(here.mode(), Mode::User);
        assert!(here.sync_from_storage());
        assert_eq!(here.mode(), Mode::Admin);
        assert_eq!(*seen.borrow(), Some(Mode::Admin));
        assert!(!here.sync_from_storage());
    }

    #[test]
    fn failed_write_still_updates_in_memory() {
        let mut store = ModeStore::open(BrokenStorage, "mode");
        let result = store.set(Mode::Admin);
        assert!(matches!(result, Err(StorageError::Write(_))));
        assert_eq!(store.mode(), Mode::Admin);
    }
}
