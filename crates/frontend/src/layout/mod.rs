pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell: header on top, sidebar on the left, page content in
/// the center.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <sidebar::Sidebar />
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
