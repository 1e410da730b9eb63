use leptos::prelude::*;

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    DeliverySummary,
    DeliveryRegister,
    PlantOrder,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::DeliverySummary => "ภาพรวมการส่งผลิต",
            Page::DeliveryRegister => "จัดการข้อมูล",
            Page::PlantOrder => "สั่งปลูก",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::DeliverySummary => "bar-chart",
            Page::DeliveryRegister => "table",
            Page::PlantOrder => "plant",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![Page::DeliverySummary, Page::DeliveryRegister, Page::PlantOrder]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::DeliverySummary),
            left_open: RwSignal::new(true),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
