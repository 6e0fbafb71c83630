//! Task Row Component
//!
//! A single draggable row: task text plus a delete button. Drag events are
//! wired to the shared gesture cell; only a committed drop reaches the store.

use leptos::prelude::*;
use leptos_reorder::{self as reorder, GestureHandle};

use crate::models::Task;
use crate::store::{store_remove_task, use_app_store};

/// One row in the task list
#[component]
pub fn TaskRow(
    task: Task,
    /// Position of this row in the current display order
    index: usize,
    /// Shared per-gesture drag state
    gesture: GestureHandle,
    /// Callback when a gesture commits a reorder
    on_move: Callback<(usize, usize)>,
) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;
    let content = task.content.clone();

    view! {
        <div
            class="task-row"
            draggable="true"
            on:dragstart=reorder::make_on_drag_start(gesture, index)
            on:dragover=reorder::make_on_drag_over(gesture, index)
            on:drop=reorder::make_on_drop(gesture, on_move)
            on:dragend=reorder::make_on_drag_end(gesture)
        >
            <span class="task-content">{content}</span>
            <button class="delete-btn" on:click=move |_| store_remove_task(&store, id)>"×"</button>
        </div>
    }
}
