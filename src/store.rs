//! Local UI State Store
//!
//! Client-only state that never touches the server cache.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::EditedTask;

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Draft shown in the task form
    pub edited_task: EditedTask,
    /// Dark theme on the guest pages
    pub is_dark: bool,
}

impl UiState {
    pub fn new(is_dark: bool) -> Self {
        Self {
            is_dark,
            ..Default::default()
        }
    }
}

pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

/// Load a task into the form for editing
pub fn store_edit_task(store: &UiStore, id: u32, title: String) {
    store.edited_task().set(EditedTask { id, title });
}

/// Change the draft title, keeping create/update intent
pub fn store_set_draft_title(store: &UiStore, title: String) {
    store.edited_task().update(|draft| draft.title = title);
}

/// Back to the empty create draft
pub fn store_reset_draft(store: &UiStore) {
    store.edited_task().set(EditedTask::default());
}

pub fn store_toggle_dark(store: &UiStore) {
    store.is_dark().update(|dark| *dark = !*dark);
}
