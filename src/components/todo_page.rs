//! Todo Page Component
//!
//! Draft form and the cached task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::QueryCacheStoreFields;
use crate::components::{AppLayout, TaskItem};
use crate::context::use_app_context;
use crate::mutations::{self, TaskMutation};
use crate::queries;
use crate::store::{store_set_draft_title, UiStateStoreFields};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();

    // Load tasks on mount
    Effect::new(move |_| queries::ensure_tasks(ctx));

    let draft = move || ctx.ui.edited_task().get();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mutation) = TaskMutation::from_draft(&ctx.ui.edited_task().get_untracked()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            mutations::run_task_mutation(&api, &ctx, mutation).await;
        });
    };

    let logout = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            mutations::logout(&api, &ctx).await;
        });
    };

    let is_loading = move || ctx.cache.tasks_loading().get() && ctx.cache.tasks().with(Option::is_none);

    view! {
        <AppLayout>
            <div class="todo">
                <div class="todo-title">
                    <span>"TaskManager"</span>
                    <button class="logout-btn" title="Logout" on:click=logout>"⇥"</button>
                </div>

                <form class="task-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="title ?"
                        prop:value=move || draft().title
                        on:input=move |ev| store_set_draft_title(&ctx.ui, event_target_value(&ev))
                    />
                    <button type="submit" prop:disabled=move || draft().title.is_empty()>
                        {move || if draft().is_new() { "Create" } else { "Update" }}
                    </button>
                </form>

                <Show
                    when=move || !is_loading()
                    fallback=|| view! { <p>"Loading..."</p> }
                >
                    <ul class="task-list">
                        <For
                            each=move || ctx.cache.tasks().get().unwrap_or_default()
                            key=|task| (task.id, task.title.clone())
                            children=move |task| view! { <TaskItem id=task.id title=task.title /> }
                        />
                    </ul>
                </Show>
            </div>
        </AppLayout>
    }
}
