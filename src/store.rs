//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list
//! operations themselves are plain functions over the task vector so they
//! stay testable off the reactive graph.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered task list; insertion order is the display and drag order
    pub tasks: Vec<Task>,
    /// Next task id to hand out; ids are never reused
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: vec![Task { id: 1, content: "project".to_string() }],
            next_id: 2,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// List Operations
// ========================

/// Mint a task with the next free id, advancing the counter
pub fn mint_task(next_id: &mut u32, content: String) -> Task {
    let task = Task { id: *next_id, content };
    *next_id += 1;
    task
}

/// Remove the task with the given id; an absent id is a no-op
pub fn remove_task(tasks: &mut Vec<Task>, id: u32) {
    tasks.retain(|task| task.id != id);
}

/// Remove the task at `from` and reinsert it at `to`, with `to` interpreted
/// against the list after removal. Equal or out-of-range indices are a
/// no-op, not an error.
pub fn move_task(tasks: &mut Vec<Task>, from: usize, to: usize) {
    if from == to || from >= tasks.len() || to >= tasks.len() {
        return;
    }
    let task = tasks.remove(from);
    tasks.insert(to, task);
}

// ========================
// Store Helper Functions
// ========================

/// Append a new task to the end of the list
pub fn store_append_task(store: &AppStore, content: String) {
    let task = mint_task(&mut store.next_id().write(), content);
    store.tasks().write().push(task);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: u32) {
    remove_task(&mut store.tasks().write(), id);
}

/// Reorder the store's task list
pub fn store_move_task(store: &AppStore, from: usize, to: usize) {
    move_task(&mut store.tasks().write(), from, to);
}
