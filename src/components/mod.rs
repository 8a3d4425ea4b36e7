//! UI Components
//!
//! Leptos views over the cache and UI stores.

mod guest_layout;
mod auth_form;
mod app_layout;
mod header;
mod todo_page;
mod task_item;
mod my_page;

pub use guest_layout::GuestLayout;
pub use auth_form::AuthForm;
pub use app_layout::AppLayout;
pub use header::Header;
pub use todo_page::TodoPage;
pub use task_item::TaskItem;
pub use my_page::MyPage;
