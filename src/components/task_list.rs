//! Task List Component
//!
//! Renders the ordered task rows and owns the drag gesture cell.

use leptos::prelude::*;
use leptos_reorder::create_gesture;

use crate::components::TaskRow;
use crate::store::{store_move_task, use_app_store, AppStateStoreFields};

/// Ordered list of task rows with drag-to-reorder
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    // One gesture cell shared by every row; the platform guarantees only
    // one drag gesture is in flight at a time
    let gesture = create_gesture();

    let on_move = Callback::new(move |(from, to): (usize, usize)| {
        web_sys::console::log_1(&format!("[LIST] move {} -> {}", from, to).into());
        store_move_task(&store, from, to);
    });

    view! {
        <div class="task-list">
            {move || {
                store.tasks().get().into_iter().enumerate().map(|(index, task)| {
                    view! {
                        <TaskRow task=task index=index gesture=gesture on_move=on_move />
                    }
                }).collect_view()
            }}
        </div>
    }
}
