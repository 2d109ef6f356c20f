//! The list state and its mutations.
//!
//! [`ListState`] is plain data with no notification machinery. Every method
//! that changes something bumps [`revision`](ListState::revision); methods
//! that turn out to be no-ops leave it alone, which is how
//! [`ListStore`](crate::ListStore) decides whether to notify subscribers.

use crate::config::{QuantityPolicy, StoreConfig};
use crate::error::AddError;
use crate::model::{parse_add_quantity, Draft, Item, ItemEditor, ItemId, Row};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    items: Vec<Item>,
    draft: Draft,
    dialog_open: bool,
    next_id: u32,
    revision: u64,
    #[serde(skip)]
    config: StoreConfig,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ListState {
    /// An empty list with the dialog closed.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            items: Vec::new(),
            draft: Draft::default(),
            dialog_open: false,
            next_id: 1,
            revision: 0,
            config,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Number of effective mutations since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item currently showing its inline editor, if any.
    pub fn editing_item(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.editing)
    }

    /// Items in display order, tagged with the presentation they need.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.items.iter().map(Row::from)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    pub fn open_add_dialog(&mut self) {
        if !self.dialog_open {
            self.dialog_open = true;
            self.touch();
            debug!("add dialog opened");
        }
    }

    /// Close the dialog and throw the draft away.
    pub fn cancel_add_dialog(&mut self) {
        if self.dialog_open || !self.draft.is_empty() {
            self.dialog_open = false;
            self.draft.clear();
            self.touch();
            debug!("add dialog cancelled");
        }
    }

    /// Close the dialog but keep what was typed, as when the user taps
    /// outside it.
    pub fn dismiss_add_dialog(&mut self) {
        if self.dialog_open {
            self.dialog_open = false;
            self.touch();
            debug!("add dialog dismissed");
        }
    }

    pub fn update_draft_name(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.draft.name != text {
            trace!(name = %text, "draft name changed");
            self.draft.name = text;
            self.touch();
        }
    }

    pub fn update_draft_quantity(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.draft.quantity != text {
            trace!(quantity = %text, "draft quantity changed");
            self.draft.quantity = text;
            self.touch();
        }
    }

    /// Turn the draft into a new item at the end of the list.
    ///
    /// On error nothing changes and the dialog stays open.
    pub fn commit_add(&mut self) -> Result<ItemId, AddError> {
        if self.draft.name.trim().is_empty() {
            debug!("add rejected: blank name");
            return Err(AddError::BlankName);
        }

        let quantity = match (parse_add_quantity(&self.draft.quantity), self.config.add_quantity) {
            (Some(quantity), _) => quantity,
            (None, QuantityPolicy::DefaultToOne) => 1,
            (None, QuantityPolicy::Reject) => {
                debug!(input = %self.draft.quantity, "add rejected: invalid quantity");
                return Err(AddError::InvalidQuantity {
                    input: self.draft.quantity.clone(),
                });
            }
        };

        let id = ItemId(self.next_id);
        self.next_id += 1;

        let name = std::mem::take(&mut self.draft.name);
        debug!(%id, name = %name, quantity, "item added");
        self.items.push(Item::new(id, name, quantity));
        self.draft.clear();
        self.dialog_open = false;
        self.touch();

        Ok(id)
    }

    /// Put `id` into edit mode and every other item out of it.
    ///
    /// Returns `false` if no item has that id; all items then end up out of
    /// edit mode.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let mut found = false;
        let mut changed = false;
        for item in &mut self.items {
            let editing = item.id == id;
            found |= editing;
            if item.editing != editing {
                item.editing = editing;
                changed = true;
            }
        }
        if changed {
            self.touch();
        }
        debug!(%id, found, "begin edit");
        found
    }

    /// Leave edit mode everywhere and store the new name and quantity on `id`.
    ///
    /// Returns `false` if no item has that id. The edit is dropped but edit
    /// mode is still cleared.
    pub fn commit_edit(&mut self, id: ItemId, name: impl Into<String>, quantity: u32) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            changed |= std::mem::replace(&mut item.editing, false);
        }

        let name = name.into();
        let found = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                if item.name != name || item.quantity != quantity {
                    debug!(%id, name = %name, quantity, "item edited");
                    item.name = name;
                    item.quantity = quantity;
                    changed = true;
                }
                true
            }
            None => {
                debug!(%id, "edit dropped: no such item");
                false
            }
        };

        if changed {
            self.touch();
        }
        found
    }

    /// [`commit_edit`](Self::commit_edit) with the contents of a row editor.
    pub fn save_edit(&mut self, editor: &ItemEditor) -> bool {
        let (name, quantity) = editor.finish();
        self.commit_edit(editor.id(), name, quantity)
    }

    /// Remove `id`, keeping the order of the remaining items.
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        self.touch();
        debug!(%id, name = %removed.name, "item deleted");
        Some(removed)
    }
}
