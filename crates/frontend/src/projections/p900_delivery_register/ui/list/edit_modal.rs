use crate::domain::a004_order::api::update_order_detail;
use contracts::domain::a004_order::{DeliveryUpdate, OrderDetailUpdate};
use contracts::enums::DeliveryStatus;
use contracts::projections::p900_delivery_register::DeliveryRow;
use contracts::shared::dates::{parse_display_date, MISSING_DATE};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Edit dialog for one register row: ordered quantity, delivery date,
/// delivered quantity and status. The row in the list is replaced only
/// after the backend confirms the update.
#[component]
pub fn EditModal(
    row: DeliveryRow,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<DeliveryRow>,
) -> impl IntoView {
    // Prefill the date input from the display form; "--" stays empty.
    let initial_date = if row.delivery_date == MISSING_DATE {
        String::new()
    } else {
        parse_display_date(&row.delivery_date)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    let (quantity_ordered, set_quantity_ordered) = signal(row.quantity_ordered.to_string());
    let (delivery_date, set_delivery_date) = signal(initial_date);
    let (quantity_delivered, set_quantity_delivered) = signal(row.quantity_delivered.to_string());
    let (status, set_status) = signal(row.status);
    let (is_saving, set_is_saving) = signal(false);

    let row_for_submit = row.clone();
    let handle_submit = move |_| {
        if is_saving.get() {
            return;
        }

        let row = row_for_submit.clone();
        let ordered: f64 = quantity_ordered
            .get()
            .parse()
            .unwrap_or(row.quantity_ordered);
        let delivered: f64 = quantity_delivered
            .get()
            .parse()
            .unwrap_or(row.quantity_delivered);
        let date_value = delivery_date.get();
        let status_value = status.get();

        let detail = OrderDetailUpdate {
            id: row.id.clone(),
            quantity_kg: ordered,
            delivery: DeliveryUpdate {
                actual_kg: delivered,
                delivered_date: if date_value.is_empty() {
                    None
                } else {
                    Some(format!("{}T00:00:00.000Z", date_value))
                },
                status: status_value.code().to_string(),
            },
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match update_order_detail(&row.order_id, &detail).await {
                Ok(()) => {
                    let mut updated = row.clone();
                    updated.quantity_ordered = ordered;
                    updated.quantity_delivered = delivered;
                    updated.delivery_date = if date_value.is_empty() {
                        MISSING_DATE.to_string()
                    } else {
                        contracts::shared::dates::format_display_date(&date_value)
                    };
                    updated.status = status_value;

                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("แก้ไขข้อมูลเรียบร้อยแล้ว").ok()));
                    on_saved.run(updated);
                }
                Err(e) => {
                    log::error!("Failed to update order detail: {}", e);
                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("ไม่สามารถแก้ไขข้อมูลได้").ok()));
                    set_is_saving.set(false);
                }
            }
        });
    };

    let field_style = "width: 100%; padding: 7px 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 14px;";

    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 60;">
            <div style="background: white; padding: 24px; border-radius: 8px; width: 380px;">
                <h2 style="margin: 0 0 16px 0; font-size: 18px;">"แก้ไขข้อมูล"</h2>

                <div style="margin-bottom: 12px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 14px;">"จำนวนที่สั่ง (กก.)"</label>
                    <input
                        type="number"
                        style=field_style
                        prop:value=quantity_ordered
                        on:input=move |ev| set_quantity_ordered.set(event_target_value(&ev))
                    />
                </div>

                <div style="margin-bottom: 12px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 14px;">"วันที่ส่งผลิต"</label>
                    <input
                        type="date"
                        style=field_style
                        prop:value=delivery_date
                        on:input=move |ev| set_delivery_date.set(event_target_value(&ev))
                    />
                </div>

                <div style="margin-bottom: 12px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 14px;">"จำนวนที่ส่ง (กก.)"</label>
                    <input
                        type="number"
                        style=field_style
                        prop:value=quantity_delivered
                        on:input=move |ev| set_quantity_delivered.set(event_target_value(&ev))
                    />
                </div>

                <div style="margin-bottom: 16px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 14px;">"สถานะ"</label>
                    <select
                        style=field_style
                        on:change=move |ev| {
                            if let Some(value) = DeliveryStatus::from_code(&event_target_value(&ev)) {
                                set_status.set(value);
                            }
                        }
                    >
                        {DeliveryStatus::all()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.code()
                                        selected=move || status.get() == option
                                    >
                                        {option.label_thai()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div style="display: flex; justify-content: flex-end; gap: 8px;">
                    <button
                        style="padding: 8px 16px; background: #eee; border: none; border-radius: 6px; cursor: pointer;"
                        on:click=move |_| on_close.run(())
                    >
                        "ยกเลิก"
                    </button>
                    <button
                        style="padding: 8px 16px; background: #2e7d32; color: white; border: none; border-radius: 6px; cursor: pointer;"
                        disabled=move || is_saving.get()
                        on:click=handle_submit
                    >
                        {move || if is_saving.get() { "กำลังบันทึก..." } else { "บันทึก" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
