//! My Page Component
//!
//! Profile of the logged-in user.

use leptos::prelude::*;

use crate::cache::QueryCacheStoreFields;
use crate::components::AppLayout;
use crate::context::use_app_context;
use crate::queries;

#[component]
pub fn MyPage() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| queries::ensure_user(ctx));

    view! {
        <AppLayout>
            <div class="wrap">
                <div class="profile">
                    {move || {
                        if ctx.cache.user_loading().get() {
                            view! { <p>"Loading..."</p> }.into_any()
                        } else {
                            match ctx.cache.user().get() {
                                Some(user) => view! {
                                    <p class="profile-email">{user.email}</p>
                                    <p class="profile-updated">
                                        {format!("updated {}", user.updated_at.format("%Y-%m-%d %H:%M"))}
                                    </p>
                                }.into_any(),
                                None => view! { <p>"No data available"</p> }.into_any(),
                            }
                        }
                    }}
                </div>
            </div>
        </AppLayout>
    }
}
