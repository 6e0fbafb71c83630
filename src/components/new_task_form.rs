//! New Task Form Component
//!
//! Text input plus Add button for appending tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_append_task, use_app_store};

/// Form for adding a new task to the end of the list
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (new_content, set_new_content) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty content is accepted as-is, no trimming or rejection
        let content = new_content.get();
        store_append_task(&store, content);
        set_new_content.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Enter your task here..."
                prop:value=move || new_content.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_content.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
