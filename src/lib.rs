//! # shopping-list
//!
//! In-memory state for a single-screen shopping list: add, edit and delete
//! items, each with a name and a quantity.
//!
//! The crate has two layers:
//!
//! - [`ListState`] - plain state with one method per mutation. Useful on its
//!   own in tests or inside another state container.
//! - [`ListStore`] - a cloneable, observable handle around a `ListState`.
//!   A rendering layer keeps one, calls its operations from UI callbacks and
//!   [`subscribe`](ListStore::subscribe)s to redraw after each change.
//!
//! At most one item is in edit mode at any time, and item ids are never
//! reused, even after deletions.
//!
//! ```
//! use shopping_list::{ListStore, Row};
//!
//! let store = ListStore::new();
//! store.open_add_dialog();
//! store.update_draft_name("Milk");
//! store.update_draft_quantity("2");
//! let milk = store.commit_add().unwrap();
//!
//! store.begin_edit(milk);
//! store.read(|state| {
//!     assert!(matches!(state.rows().next(), Some(Row::Editor(_))));
//! });
//!
//! store.commit_edit(milk, "Milk", 3);
//! assert_eq!(store.item(milk).unwrap().quantity, 3);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;

// Re-export main types for convenience
pub use config::{QuantityPolicy, StoreConfig};
pub use error::AddError;
pub use model::{parse_add_quantity, parse_edit_quantity, Draft, Item, ItemEditor, ItemId, Row};
pub use state::ListState;
pub use store::{ListStore, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = ListStore::new();
        assert!(store.is_empty());
        store.update_draft_name("Tea");
        store.update_draft_quantity("1");
        assert_eq!(store.commit_add(), Ok(ItemId(1)));
        assert_eq!(store.len(), 1);
    }
}
