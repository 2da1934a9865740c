//! Notice Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Latest validation or storage notice, dismissable
#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <div class=notice.class() role="alert">
                <span class="notice-text">{notice.message()}</span>
                <button class="notice-dismiss" on:click=move |_| ctx.dismiss()>"×"</button>
            </div>
        })}
    }
}
