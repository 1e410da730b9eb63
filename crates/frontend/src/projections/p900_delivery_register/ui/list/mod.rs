pub mod edit_modal;

use crate::domain::a004_order::api::{delete_order_detail, get_orders};
use crate::domain::a004_order::OrderQuery;
use crate::shared::icons::icon;
use crate::shared::pagination::Pagination;
use contracts::enums::DeliveryStatus;
use contracts::projections::p900_delivery_register::{
    flatten_register, sort_rows, DeliveryRow, RegisterFilter, SortKey,
};
use contracts::shared::dates::parse_input_date;
use edit_modal::EditModal;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn format_quantity(value: f64) -> String {
    value.to_string()
}

#[component]
pub fn DeliveryRegisterList() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<DeliveryRow>::new());

    // Search inputs. The text box is debounced into `search_text`; the rest
    // applies immediately. Every input change resets pagination.
    let (search_input, set_search_input) = signal(String::new());
    let (search_text, set_search_text) = signal(String::new());
    let (show_advanced, set_show_advanced) = signal(false);
    let (range_start, set_range_start) = signal(String::new());
    let (range_end, set_range_end) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());

    let (sort_key, set_sort_key) = signal(None::<SortKey>);
    let (sort_ascending, set_sort_ascending) = signal(true);

    let (current_page, set_current_page) = signal(1_usize);
    let (page_size, set_page_size) = signal(10_usize);

    let (editing_row, set_editing_row) = signal(None::<DeliveryRow>);

    spawn_local(async move {
        match get_orders(&OrderQuery::default()).await {
            Ok(response) => {
                if response.data.is_empty() {
                    log::warn!("No data received from API");
                }
                set_rows.set(flatten_register(&response.data));
            }
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                set_rows.set(Vec::new());
            }
        }
    });

    // Debounced text search, 300ms
    let debounce = StoredValue::new_local(None::<Timeout>);
    let handle_search_input = move |value: String| {
        set_search_input.set(value.clone());
        debounce.update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
        let timeout = Timeout::new(300, move || {
            set_search_text.set(value);
            set_current_page.set(1);
        });
        debounce.set_value(Some(timeout));
    };

    let filtered = move || {
        let filter = RegisterFilter {
            search: search_text.get(),
            date_start: parse_input_date(&range_start.get()),
            date_end: parse_input_date(&range_end.get()),
            status: DeliveryStatus::from_code(&status_filter.get()),
        };
        filter.apply(&rows.get())
    };

    let sorted = move || {
        let mut data = filtered();
        if let Some(key) = sort_key.get() {
            sort_rows(&mut data, key, sort_ascending.get());
        }
        data
    };

    let total_pages = move || filtered().len().div_ceil(page_size.get().max(1));

    let toggle_sort = move |key: SortKey| {
        if sort_key.get() == Some(key) {
            set_sort_ascending.update(|asc| *asc = !*asc);
        } else {
            set_sort_key.set(Some(key));
            set_sort_ascending.set(true);
        }
    };

    let sort_indicator = move |key: SortKey| {
        if sort_key.get() == Some(key) {
            if sort_ascending.get() {
                " ↑"
            } else {
                " ↓"
            }
        } else {
            ""
        }
    };

    let handle_delete = move |row: DeliveryRow| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("คุณต้องการลบข้อมูลนี้ใช่หรือไม่?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_order_detail(&row.order_id, &row.id).await {
                Ok(()) => {
                    // drop the row only after the backend confirms
                    set_rows.update(|rows| rows.retain(|r| r.id != row.id));
                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("ลบข้อมูลสำเร็จ").ok()));
                }
                Err(e) => {
                    log::error!("Error deleting order detail: {}", e);
                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("ไม่สามารถลบข้อมูลได้").ok()));
                }
            }
        });
    };

    let th_style = "padding: 10px 12px; font-weight: 700; color: #555; cursor: pointer; user-select: none; white-space: nowrap;";

    view! {
        <div style="display: flex; flex-direction: column; gap: 14px; padding: 12px;">
            <div style="font-size: 20px;">"จัดการข้อมูล"</div>

            // Search row
            <div style="display: flex; gap: 10px; align-items: center; flex-wrap: wrap;">
                <div style="position: relative; display: inline-flex; align-items: center;">
                    <span style="position: absolute; left: 10px; color: #999; display: inline-flex;">
                        {icon("search")}
                    </span>
                    <input
                        type="text"
                        placeholder="ค้นหาข้อมูล (ชื่อ, จำนวนกิโล)"
                        style="width: 320px; padding: 9px 10px 9px 38px; border: 1px solid #ccc; border-radius: 8px; font-size: 14px;"
                        prop:value=search_input
                        on:input=move |ev| handle_search_input(event_target_value(&ev))
                    />
                </div>
                <button
                    style="padding: 9px 16px; background: #9e9e9e; color: white; border: none; border-radius: 6px; cursor: pointer;"
                    on:click=move |_| set_show_advanced.update(|v| *v = !*v)
                >
                    "เพิ่มเติม"
                </button>
            </div>

            // Advanced search
            {move || {
                if show_advanced.get() {
                    view! {
                        <div style="display: flex; gap: 8px; align-items: center; flex-wrap: wrap;">
                            <span style="font-size: 14px; color: #555;">"ช่วงวันที่:"</span>
                            <input
                                type="date"
                                style="padding: 7px 10px; border: 1px solid #ccc; border-radius: 6px;"
                                prop:value=range_start
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    // keep the end bound at or after the start
                                    if let (Some(start), Some(end)) =
                                        (parse_input_date(&value), parse_input_date(&range_end.get()))
                                    {
                                        if start > end {
                                            set_range_end.set(value.clone());
                                        }
                                    }
                                    set_range_start.set(value);
                                    set_current_page.set(1);
                                }
                            />
                            <span style="font-size: 14px; color: #555;">"ถึง"</span>
                            <input
                                type="date"
                                style="padding: 7px 10px; border: 1px solid #ccc; border-radius: 6px;"
                                prop:value=range_end
                                min=move || range_start.get()
                                on:input=move |ev| {
                                    set_range_end.set(event_target_value(&ev));
                                    set_current_page.set(1);
                                }
                            />
                            <select
                                style="padding: 7px 10px; border: 1px solid #ccc; border-radius: 6px; background: white;"
                                on:change=move |ev| {
                                    set_status_filter.set(event_target_value(&ev));
                                    set_current_page.set(1);
                                }
                            >
                                <option value="">"สถานะทั้งหมด"</option>
                                {DeliveryStatus::all()
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <option
                                                value=status.code()
                                                selected=move || status_filter.get() == status.code()
                                            >
                                                {status.label_thai()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            // Page size
            <div style="display: flex; align-items: center; gap: 8px; font-size: 14px;">
                <span>"แสดง"</span>
                <select
                    style="padding: 5px 8px; border: 1px solid #ccc; border-radius: 6px; background: white;"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            set_page_size.set(size);
                            set_current_page.set(1);
                        }
                    }
                >
                    {[10_usize, 25, 50, 100]
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <span>"รายการ"</span>
            </div>

            // Table
            <div style="background: white; border: 1px solid #ddd; border-radius: 8px;">
                <div style="overflow-x: auto;">
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px; text-align: left;">
                        <thead>
                            <tr style="background: #eee;">
                                <th style="padding: 10px 12px; font-weight: 700; color: #555;">"ลำดับ"</th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::Farmer)>
                                    "ลูกสวน" {move || sort_indicator(SortKey::Farmer)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::Vegetable)>
                                    "ชื่อผัก" {move || sort_indicator(SortKey::Vegetable)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::Buyer)>
                                    "ผู้รับซื้อ" {move || sort_indicator(SortKey::Buyer)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::OrderDate)>
                                    "วันที่สั่งปลูก" {move || sort_indicator(SortKey::OrderDate)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::DueDate)>
                                    "วันที่กำหนดส่ง" {move || sort_indicator(SortKey::DueDate)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::QuantityOrdered)>
                                    "จำนวนที่สั่ง (กก.)" {move || sort_indicator(SortKey::QuantityOrdered)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::DeliveryDate)>
                                    "วันที่ส่งผลิต" {move || sort_indicator(SortKey::DeliveryDate)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::QuantityDelivered)>
                                    "จำนวนที่ส่ง (กก.)" {move || sort_indicator(SortKey::QuantityDelivered)}
                                </th>
                                <th style=th_style on:click=move |_| toggle_sort(SortKey::Status)>
                                    "สถานะ" {move || sort_indicator(SortKey::Status)}
                                </th>
                                <th style="padding: 10px 12px; font-weight: 700; color: #555; text-align: center;">"จัดการข้อมูล"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let start = (current_page.get() - 1) * page_size.get();
                                sorted()
                                    .into_iter()
                                    .skip(start)
                                    .take(page_size.get())
                                    .enumerate()
                                    .map(|(index, row)| {
                                        let row_for_edit = row.clone();
                                        let row_for_delete = row.clone();
                                        view! {
                                            <tr style="border-bottom: 1px solid #f0f0f0;">
                                                <td style="padding: 10px 12px; color: #555;">{start + index + 1}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.farmer_name.clone()}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.vegetable_name.clone()}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.buyer_name.clone()}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.order_date.clone()}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.due_date.clone()}</td>
                                                <td style="padding: 10px 12px; color: #555;">{format_quantity(row.quantity_ordered)}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.delivery_date.clone()}</td>
                                                <td style="padding: 10px 12px; color: #555;">{format_quantity(row.quantity_delivered)}</td>
                                                <td style="padding: 10px 12px; color: #555;">{row.status.label_thai()}</td>
                                                <td style="padding: 10px 12px;">
                                                    <div style="display: flex; justify-content: center; gap: 8px;">
                                                        <button
                                                            style="padding: 6px 14px; background: #2e7d32; color: white; border: none; border-radius: 6px; cursor: pointer;"
                                                            on:click=move |_| set_editing_row.set(Some(row_for_edit.clone()))
                                                        >
                                                            "แก้ไข"
                                                        </button>
                                                        <button
                                                            style="padding: 6px 14px; background: #d32f2f; color: white; border: none; border-radius: 6px; cursor: pointer;"
                                                            on:click=move |_| handle_delete(row_for_delete.clone())
                                                        >
                                                            "ลบ"
                                                        </button>
                                                    </div>
                                                </td>
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
                    total_pages=Signal::derive(total_pages)
                    on_select=Callback::new(move |page| set_current_page.set(page))
                />
            </div>

            // Edit dialog
            {move || {
                if let Some(row) = editing_row.get() {
                    view! {
                        <EditModal
                            row=row
                            on_close=Callback::new(move |_| set_editing_row.set(None))
                            on_saved=Callback::new(move |updated: DeliveryRow| {
                                set_rows.update(|rows| {
                                    if let Some(slot) = rows.iter_mut().find(|r| r.id == updated.id) {
                                        *slot = updated.clone();
                                    }
                                });
                                set_editing_row.set(None);
                            })
                        />
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
