//! Taskdrop Frontend App
//!
//! Main application component: add form, draggable task list, count line.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, TaskList};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    view! {
        <main class="app-layout">
            <h1>"Drag and Drop"</h1>

            <NewTaskForm />

            <TaskList />

            <p class="task-count">{move || format!("{} tasks", store.tasks().get().len())}</p>
        </main>
    }
}
