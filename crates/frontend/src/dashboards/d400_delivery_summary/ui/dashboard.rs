use super::charts::{BarChart, PieChart};
use crate::domain::a001_vegetable::api::get_vegetables;
use crate::domain::a002_farmer::api::get_farmers;
use crate::domain::a003_buyer::api::get_buyers;
use crate::domain::a004_order::api::get_orders;
use crate::domain::a004_order::OrderQuery;
use crate::shared::export::{export_csv, CsvExport};
use crate::shared::icons::icon;
use crate::shared::list_utils::sort_by_thai_name;
use crate::shared::pagination::Pagination;
use crate::system::users::api::get_users;
use contracts::dashboards::d400_delivery_summary::series::format_kg;
use contracts::dashboards::d400_delivery_summary::{
    buyer_series, flatten_orders, vegetable_series, DeliveryFilter, OrderLineItem,
};
use contracts::domain::a001_vegetable::Vegetable;
use contracts::domain::a002_farmer::Farmer;
use contracts::domain::a003_buyer::Buyer;
use contracts::shared::dates::parse_input_date;
use contracts::system::users::UserDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

const ITEMS_PER_PAGE: usize = 10;

// CSV report contract: fixed Thai header, running number first, fields
// written verbatim.
impl CsvExport for OrderLineItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "ลำดับ",
            "ชื่อ",
            "จำนวนผลิต (กก.)",
            "จำนวนส่ง (กก.)",
            "วันเก็บ",
            "ผู้ซื้อ",
        ]
    }

    fn csv_row(&self, index: usize) -> Vec<String> {
        vec![
            (index + 1).to_string(),
            self.vegetable_name.clone(),
            format_kg(self.quantity_ordered),
            format_kg(self.quantity_delivered),
            self.harvest_date.clone(),
            self.buyer_name.clone(),
        ]
    }
}

/// The CSV report covers the currently filtered rows; with nothing passing
/// the filters it falls back to the full unfiltered list.
fn export_data_set(filtered: Vec<OrderLineItem>, all: Vec<OrderLineItem>) -> Vec<OrderLineItem> {
    if filtered.is_empty() {
        all
    } else {
        filtered
    }
}

#[component]
pub fn DeliverySummaryDashboard() -> impl IntoView {
    let (vegetables, set_vegetables) = signal(Vec::<Vegetable>::new());
    let (buyers, set_buyers) = signal(Vec::<Buyer>::new());
    // Held for the session like the other collections; nothing renders them.
    let (_farmers, set_farmers) = signal(Vec::<Farmer>::new());
    let (_users, set_users) = signal(Vec::<UserDto>::new());
    let (line_items, set_line_items) = signal(Vec::<OrderLineItem>::new());

    // Filter inputs: selection sets start all-false, dates unset.
    let (selected_vegetables, set_selected_vegetables) = signal(HashSet::<String>::new());
    let (selected_buyers, set_selected_buyers) = signal(HashSet::<String>::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());

    let (current_page, set_current_page) = signal(1_usize);

    // Five independent fetches; completions interleave freely and each one
    // only overwrites its own slice of state. A failure logs and leaves the
    // slice empty.
    spawn_local(async move {
        match get_vegetables().await {
            Ok(mut data) => {
                sort_by_thai_name(&mut data, |v| v.name.clone());
                set_vegetables.set(data);
            }
            Err(e) => log::error!("Failed to fetch vegetables: {}", e),
        }
    });
    spawn_local(async move {
        match get_buyers().await {
            Ok(mut data) => {
                sort_by_thai_name(&mut data, |b| b.name.clone());
                set_buyers.set(data);
            }
            Err(e) => log::error!("Failed to fetch buyers: {}", e),
        }
    });
    spawn_local(async move {
        match get_farmers().await {
            Ok(data) => set_farmers.set(data),
            Err(e) => log::error!("Failed to fetch farmers: {}", e),
        }
    });
    spawn_local(async move {
        match get_users().await {
            Ok(data) => set_users.set(data),
            Err(e) => log::error!("Failed to fetch users: {}", e),
        }
    });
    spawn_local(async move {
        match get_orders(&OrderQuery::default()).await {
            Ok(response) => set_line_items.set(flatten_orders(&response.data)),
            Err(e) => log::error!("Failed to fetch orders: {}", e),
        }
    });

    // The filter pipeline re-runs on any input change; pagination is reset
    // by the input handlers, never by the pipeline itself.
    let filter = Memo::new(move |_| DeliveryFilter {
        vegetable_ids: selected_vegetables.get(),
        buyer_ids: selected_buyers.get(),
        start_date: parse_input_date(&start_date.get()),
        end_date: parse_input_date(&end_date.get()),
    });
    let filtered = Memo::new(move |_| filter.get().apply(&line_items.get(), &vegetables.get()));

    // Both chart series are replaced on every filter pass.
    let pie = Memo::new(move |_| buyer_series(&filtered.get()));
    let bar = Memo::new(move |_| vegetable_series(&filtered.get()));

    let total_pages = Memo::new(move |_| filtered.get().len().div_ceil(ITEMS_PER_PAGE));
    let page_items = move || {
        let items = filtered.get();
        let start = (current_page.get() - 1) * ITEMS_PER_PAGE;
        items
            .iter()
            .skip(start)
            .take(ITEMS_PER_PAGE)
            .cloned()
            .collect::<Vec<_>>()
    };

    let toggle_vegetable = move |id: String| {
        set_selected_vegetables.update(|ids| {
            if ids.contains(&id) {
                ids.remove(&id);
            } else {
                ids.insert(id);
            }
        });
        set_current_page.set(1);
    };

    let toggle_buyer = move |id: String| {
        set_selected_buyers.update(|ids| {
            if ids.contains(&id) {
                ids.remove(&id);
            } else {
                ids.insert(id);
            }
        });
        set_current_page.set(1);
    };

    let handle_clear_dates = move |_| {
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        set_current_page.set(1);
    };

    let handle_csv_export = move |_| {
        let data = export_data_set(filtered.get_untracked(), line_items.get_untracked());
        let filename = format!(
            "รายงานการส่งผลิต_{}.csv",
            chrono::Utc::now().format("%Y-%m-%d")
        );
        if let Err(e) = export_csv(&data, &filename) {
            web_sys::window()
                .and_then(|w| Some(w.alert_with_message(&format!("ไม่สามารถนำออกข้อมูลได้: {}", e)).ok()));
        }
    };

    let panel_style = "background: white; border: 1px solid #ddd; border-radius: 8px; padding: 14px;";

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px; padding: 12px;">
            <div style="display: flex; gap: 12px; align-items: stretch;">
                // Vegetable selection
                <div style=format!("{} width: 25%; overflow-y: auto; max-height: 360px;", panel_style)>
                    <div style="display: flex; align-items: center; gap: 6px; font-weight: 600; margin-bottom: 6px;">
                        {icon("plant")}
                        "เลือกผัก"
                    </div>
                    {move || {
                        vegetables
                            .get()
                            .into_iter()
                            .map(|vegetable| {
                                let id = vegetable.id.clone();
                                let id_for_toggle = vegetable.id.clone();
                                view! {
                                    <label style="display: flex; align-items: center; gap: 6px; padding: 3px 0; cursor: pointer; font-size: 14px;">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected_vegetables.get().contains(&id)
                                            on:change=move |_| toggle_vegetable(id_for_toggle.clone())
                                        />
                                        <span>{vegetable.name.clone()}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                // Deliveries by buyer
                <div style=format!("{} width: 75%;", panel_style)>
                    <div style="margin-bottom: 8px;">"ผลผลิตรวมแยกตามผู้ซื้อ (กก.)"</div>
                    <PieChart series=Signal::derive(move || pie.get()) />
                </div>
            </div>

            <div style="display: flex; gap: 12px; align-items: stretch;">
                <div style="display: flex; flex-direction: column; gap: 12px; width: 25%;">
                    // Buyer selection
                    <div style=format!("{} overflow-y: auto; max-height: 200px;", panel_style)>
                        <div style="display: flex; align-items: center; gap: 6px; font-weight: 600; margin-bottom: 6px;">
                            {icon("table")}
                            "เลือกผู้ซื้อ"
                        </div>
                        {move || {
                            buyers
                                .get()
                                .into_iter()
                                .map(|buyer| {
                                    let id = buyer.id.clone();
                                    let id_for_toggle = buyer.id.clone();
                                    view! {
                                        <label style="display: flex; align-items: center; gap: 6px; padding: 3px 0; cursor: pointer; font-size: 14px;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected_buyers.get().contains(&id)
                                                on:change=move |_| toggle_buyer(id_for_toggle.clone())
                                            />
                                            <span>{buyer.name.clone()}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    // Date range
                    <div style=panel_style>
                        <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;">
                            <span style="font-weight: 600;">"เลือกช่วงเวลา"</span>
                            <button
                                style="background: #eee; border: none; border-radius: 50%; padding: 6px; cursor: pointer; display: inline-flex;"
                                title="ล้างช่วงเวลา"
                                on:click=handle_clear_dates
                            >
                                {icon("filter-off")}
                            </button>
                        </div>
                        <div style="display: flex; flex-direction: column; gap: 6px;">
                            <label style="font-size: 13px; color: #555;">"วันเริ่มต้น"</label>
                            <input
                                type="date"
                                style="padding: 5px 8px; border: 1px solid #ccc; border-radius: 4px;"
                                prop:value=start_date
                                on:input=move |ev| {
                                    set_start_date.set(event_target_value(&ev));
                                    set_current_page.set(1);
                                }
                            />
                            <label style="font-size: 13px; color: #555;">"สิ้นสุด"</label>
                            <input
                                type="date"
                                style="padding: 5px 8px; border: 1px solid #ccc; border-radius: 4px;"
                                prop:value=end_date
                                min=move || start_date.get()
                                on:input=move |ev| {
                                    set_end_date.set(event_target_value(&ev));
                                    set_current_page.set(1);
                                }
                            />
                        </div>
                    </div>
                </div>

                // Deliveries by vegetable
                <div style=format!("{} width: 75%;", panel_style)>
                    <div style="margin-bottom: 8px;">"ผลผลิตรวมแยกตามผัก (กก.)"</div>
                    <BarChart series=Signal::derive(move || bar.get()) />
                </div>
            </div>

            // Export + table
            <div style="display: flex; justify-content: flex-end;">
                <button
                    style="display: inline-flex; align-items: center; gap: 6px; padding: 8px 16px; font-size: 14px; color: white; background: #2e7d32; border: none; border-radius: 8px; cursor: pointer;"
                    on:click=handle_csv_export
                >
                    {icon("download")}
                    "นำออกข้อมูล CSV"
                </button>
            </div>

            <div style=panel_style>
                <div style="overflow-x: auto;">
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px; text-align: left;">
                        <thead>
                            <tr style="background: #eee;">
                                <th style="padding: 10px 14px;">"ลำดับ"</th>
                                <th style="padding: 10px 14px;">"ชื่อ"</th>
                                <th style="padding: 10px 14px;">"ผู้ซื้อ"</th>
                                <th style="padding: 10px 14px;">"จำนวนผลิต (กก.)"</th>
                                <th style="padding: 10px 14px;">"จำนวนส่ง (กก.)"</th>
                                <th style="padding: 10px 14px;">"กำหนดส่ง"</th>
                                <th style="padding: 10px 14px;">"วันเก็บ"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let start = (current_page.get() - 1) * ITEMS_PER_PAGE;
                                page_items()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        view! {
                                            <tr style="border-bottom: 1px solid #f0f0f0;">
                                                <td style="padding: 10px 14px; color: #555;">{start + index + 1}</td>
                                                <td style="padding: 10px 14px; color: #555;">{item.vegetable_name.clone()}</td>
                                                <td style="padding: 10px 14px; color: #555;">{item.buyer_name.clone()}</td>
                                                <td style="padding: 10px 14px; color: #555;">{format_kg(item.quantity_ordered)}</td>
                                                <td style="padding: 10px 14px; color: #555;">{format_kg(item.quantity_delivered)}</td>
                                                <td style="padding: 10px 14px; color: #555;">{item.due_date.clone()}</td>
                                                <td style="padding: 10px 14px; color: #555;">{item.harvest_date.clone()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <Pagination
                    current=current_page
                    total_pages=Signal::derive(move || total_pages.get())
                    on_select=Callback::new(move |page| set_current_page.set(page))
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> OrderLineItem {
        OrderLineItem {
            id: id.to_string(),
            vegetable_name: "คะน้า".to_string(),
            quantity_ordered: 1.0,
            quantity_delivered: 1.0,
            harvest_date: "--".to_string(),
            buyer_id: None,
            buyer_name: "-".to_string(),
            due_date: "--".to_string(),
        }
    }

    #[test]
    fn empty_filtered_set_exports_the_full_list() {
        let all = vec![item("a"), item("b")];
        let exported = export_data_set(Vec::new(), all.clone());
        assert_eq!(exported.len(), 2);

        let exported = export_data_set(vec![item("a")], all);
        assert_eq!(exported.len(), 1);
    }
}
