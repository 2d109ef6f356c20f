use crate::config::StoreConfig;
use crate::error::AddError;
use crate::model::{Draft, Item, ItemEditor, ItemId};
use crate::state::ListState;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::trace;

type Subscriber = Arc<dyn Fn(&ListState) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_key: usize,
    entries: Vec<(usize, Subscriber)>,
}

/// Shared, observable shopping-list state.
///
/// Clones share the same list. Every operation runs synchronously; when it
/// changes the state, subscribers are called with the new state before the
/// operation returns.
///
/// ```
/// use shopping_list::{Item, ListStore};
///
/// let store = ListStore::new();
/// store.open_add_dialog();
/// store.update_draft_name("Milk");
/// store.update_draft_quantity("2");
/// let id = store.commit_add().unwrap();
///
/// assert_eq!(store.items(), vec![Item::new(id, "Milk", 2)]);
/// assert!(!store.is_dialog_open());
/// ```
pub struct ListStore {
    state: Arc<RwLock<ListState>>,
    subscribers: Arc<RwLock<Subscribers>>,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    /// An empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(ListState::new(config))),
            subscribers: Arc::new(RwLock::new(Subscribers::default())),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, ListState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, ListState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` and notify subscribers if it bumped the revision.
    fn mutate<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        let (result, changed) = {
            let mut state = self.state_mut();
            let before = state.revision();
            let result = f(&mut state);
            (result, state.revision() != before)
        };
        if changed {
            self.notify();
        }
        result
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();

        if subscribers.is_empty() {
            return;
        }

        // Subscribers get their own copy so they can call back into the store.
        let state = self.snapshot();
        trace!(revision = state.revision(), subscribers = subscribers.len(), "notifying");
        for subscriber in &subscribers {
            subscriber(&state);
        }
    }

    /// Call `callback` after every change until the returned guard is dropped.
    ///
    /// The callback receives a snapshot taken right after the change. A
    /// mutation made from inside a callback notifies again, recursively.
    #[must_use = "the callback is unregistered when the subscription is dropped"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ListState) + Send + Sync + 'static,
    {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let key = subscribers.next_key;
        subscribers.next_key += 1;
        subscribers.entries.push((key, Arc::new(callback)));

        Subscription {
            key,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Read state without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ListState) -> R,
    {
        f(&*self.state())
    }

    /// A copy of the whole state.
    pub fn snapshot(&self) -> ListState {
        self.state().clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.state().items().to_vec()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.state().item(id).cloned()
    }

    pub fn draft(&self) -> Draft {
        self.state().draft().clone()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.state().is_dialog_open()
    }

    pub fn editing_item(&self) -> Option<Item> {
        self.state().editing_item().cloned()
    }

    pub fn len(&self) -> usize {
        self.state().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        self.state().total_quantity()
    }

    pub fn revision(&self) -> u64 {
        self.state().revision()
    }

    pub fn open_add_dialog(&self) {
        self.mutate(ListState::open_add_dialog)
    }

    pub fn cancel_add_dialog(&self) {
        self.mutate(ListState::cancel_add_dialog)
    }

    pub fn dismiss_add_dialog(&self) {
        self.mutate(ListState::dismiss_add_dialog)
    }

    pub fn update_draft_name(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|state| state.update_draft_name(text))
    }

    pub fn update_draft_quantity(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|state| state.update_draft_quantity(text))
    }

    pub fn commit_add(&self) -> Result<ItemId, AddError> {
        self.mutate(ListState::commit_add)
    }

    pub fn begin_edit(&self, id: ItemId) -> bool {
        self.mutate(|state| state.begin_edit(id))
    }

    pub fn commit_edit(&self, id: ItemId, name: impl Into<String>, quantity: u32) -> bool {
        let name = name.into();
        self.mutate(|state| state.commit_edit(id, name, quantity))
    }

    pub fn save_edit(&self, editor: &ItemEditor) -> bool {
        self.mutate(|state| state.save_edit(editor))
    }

    pub fn delete_item(&self, id: ItemId) -> Option<Item> {
        self.mutate(|state| state.delete_item(id))
    }
}

impl Clone for ListStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

/// RAII guard for a store subscriber.
pub struct Subscription {
    key: usize,
    subscribers: Weak<RwLock<Subscribers>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            let mut subscribers = subscribers.write().unwrap_or_else(PoisonError::into_inner);
            subscribers.entries.retain(|(key, _)| *key != self.key);
        }
    }
}
