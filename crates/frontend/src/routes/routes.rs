use crate::dashboards::DeliverySummaryDashboard;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::projections::DeliveryRegisterList;
use crate::usecases::PlantOrderForm;
use leptos::prelude::*;

// Page switching is context-driven; no URL router is involved.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <Shell
            center=move || {
                match ctx.page.get() {
                    Page::DeliverySummary => view! { <DeliverySummaryDashboard /> }.into_any(),
                    Page::DeliveryRegister => view! { <DeliveryRegisterList /> }.into_any(),
                    Page::PlantOrder => view! { <PlantOrderForm /> }.into_any(),
                }
            }
        />
    }
}
