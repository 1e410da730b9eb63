use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div style="display: flex; align-items: center; gap: 12px; padding: 8px 16px; background: #2e7d32; color: white;">
            <button
                style="background: none; border: none; color: white; cursor: pointer; display: inline-flex; align-items: center;"
                title="เมนู"
                on:click=move |_| ctx.left_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <div style="font-size: 18px; font-weight: 600;">
                "ระบบติดตามผลผลิตผัก"
            </div>
            <div style="margin-left: auto; font-size: 13px; opacity: 0.85;">
                {move || ctx.page.get().label()}
            </div>
        </div>
    }
}
