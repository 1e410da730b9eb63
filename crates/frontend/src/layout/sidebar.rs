use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div
            style=move || format!(
                "width: 220px; background: #f5f5f5; border-right: 1px solid #ddd; padding: 8px 0; flex-shrink: 0; display: {};",
                if ctx.left_open.get() { "block" } else { "none" }
            )
        >
            {Page::all()
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            style=move || format!(
                                "display: flex; align-items: center; gap: 8px; width: 100%; text-align: left; padding: 10px 16px; border: none; cursor: pointer; font-size: 15px; background: {}; color: {};",
                                if ctx.page.get() == page { "#2e7d32" } else { "transparent" },
                                if ctx.page.get() == page { "white" } else { "#333" }
                            )
                            on:click=move |_| ctx.page.set(page)
                        >
                            {icon(page.icon())}
                            <span>{page.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
