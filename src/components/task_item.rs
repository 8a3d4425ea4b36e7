//! Task Item Component
//!
//! One row of the task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::mutations::{self, TaskMutation};
use crate::store::store_edit_task;

#[component]
pub fn TaskItem(id: u32, title: String) -> impl IntoView {
    let ctx = use_app_context();
    let edit_title = title.clone();

    let delete = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            mutations::run_task_mutation(&api, &ctx, TaskMutation::Delete { id }).await;
        });
    };

    view! {
        <li class="task-item">
            <span class="task-title">{title}</span>
            <div class="task-actions">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| store_edit_task(&ctx.ui, id, edit_title.clone())
                >
                    "✎"
                </button>
                <button class="delete-btn" title="Delete" on:click=delete>
                    "×"
                </button>
            </div>
        </li>
    }
}
