//! A scripted shopping-list session: add, edit and delete items while a
//! subscriber redraws the list after every change.
//!
//! Run with `RUST_LOG=shopping_list=debug` to see the store's own log lines.

use shopping_list::{ItemEditor, ListState, ListStore, Row};
use tracing_subscriber::EnvFilter;

fn render(state: &ListState) {
    println!("   --- revision {} ---", state.revision());
    if state.is_dialog_open() {
        let draft = state.draft();
        println!("   [Add item] name: {:?} qty: {:?}", draft.name, draft.quantity);
    }
    for row in state.rows() {
        match row {
            Row::Display(item) => println!("   {} {:<12} Qty: {}", item.id, item.name, item.quantity),
            Row::Editor(item) => println!("   {} [editing {:?} / {}]", item.id, item.name, item.quantity),
        }
    }
}

fn add(store: &ListStore, name: &str, quantity: &str) {
    store.open_add_dialog();
    store.update_draft_name(name);
    store.update_draft_quantity(quantity);
    match store.commit_add() {
        Ok(id) => println!("\nAdded {name} as {id}"),
        Err(err) => println!("\nCould not add {name:?}: {err}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Shopping List Session ===");

    let store = ListStore::new();
    let _redraw = store.subscribe(render);

    add(&store, "Milk", "2");
    add(&store, "Eggs", "12");
    add(&store, "   ", "1");
    store.cancel_add_dialog();
    add(&store, "Bread", "a loaf");
    store.update_draft_quantity("1");
    let _ = store.commit_add();

    println!("\nEditing Milk");
    if let Some(milk) = store.items().first().cloned() {
        store.begin_edit(milk.id);
        let mut editor = ItemEditor::for_item(&milk);
        editor.set_quantity("3");
        store.save_edit(&editor);
    }

    println!("\nDeleting Eggs");
    if let Some(eggs) = store.items().iter().find(|item| item.name == "Eggs") {
        store.delete_item(eggs.id);
    }

    println!("\nTotal quantity: {}", store.total_quantity());
}
