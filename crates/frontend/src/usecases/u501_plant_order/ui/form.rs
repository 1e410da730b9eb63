use crate::domain::a001_vegetable::api::get_vegetables;
use crate::domain::a002_farmer::api::get_farmers;
use crate::domain::a003_buyer::api::get_buyers;
use crate::domain::a004_order::api::{create_order, get_top_vegetables, predict_order};
use crate::shared::list_utils::sort_by_thai_name;
use contracts::dashboards::d400_delivery_summary::series::format_kg;
use contracts::domain::a001_vegetable::Vegetable;
use contracts::domain::a002_farmer::Farmer;
use contracts::domain::a003_buyer::Buyer;
use contracts::domain::a004_order::{NewOrder, NewOrderDetail, PredictRequest, TopVegetable};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Planting order form: pick farmer/vegetable/buyer, quantities and dates,
/// optionally ask the model for the expected yield, then submit.
#[component]
pub fn PlantOrderForm() -> impl IntoView {
    let (vegetables, set_vegetables) = signal(Vec::<Vegetable>::new());
    let (buyers, set_buyers) = signal(Vec::<Buyer>::new());
    let (farmers, set_farmers) = signal(Vec::<Farmer>::new());

    let (vegetable_id, set_vegetable_id) = signal(String::new());
    let (buyer_id, set_buyer_id) = signal(String::new());
    let (farmer_id, set_farmer_id) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (order_date, set_order_date) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (season, set_season) = signal(String::new());

    let (top_vegetables, set_top_vegetables) = signal(Vec::<TopVegetable>::new());
    let (predicted, set_predicted) = signal(None::<f64>);
    let (is_submitting, set_is_submitting) = signal(false);

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
            Ok(mut data) => {
                sort_by_thai_name(&mut data, |f| f.full_name());
                set_farmers.set(data);
            }
            Err(e) => log::error!("Failed to fetch farmers: {}", e),
        }
    });

    // Selecting a farmer pulls that farmer's best-performing vegetables as
    // a planting hint.
    let handle_farmer_change = move |id: String| {
        set_farmer_id.set(id.clone());
        set_predicted.set(None);
        if id.is_empty() {
            set_top_vegetables.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match get_top_vegetables(&id).await {
                Ok(data) => set_top_vegetables.set(data),
                Err(e) => {
                    log::error!("Failed to fetch top vegetables: {}", e);
                    set_top_vegetables.set(Vec::new());
                }
            }
        });
    };

    let handle_predict = move |_| {
        let request = PredictRequest {
            vegetable_id: vegetable_id.get(),
            farmer_id: farmer_id.get(),
            quantity_kg: quantity.get().parse().unwrap_or(0.0),
            order_date: order_date.get(),
        };
        if request.vegetable_id.is_empty() || request.farmer_id.is_empty() || request.order_date.is_empty() {
            web_sys::window()
                .and_then(|w| Some(w.alert_with_message("กรุณาเลือกผัก ลูกสวน และวันที่สั่งปลูกก่อนทำนาย").ok()));
            return;
        }
        spawn_local(async move {
            match predict_order(&request).await {
                Ok(response) => set_predicted.set(Some(response.predicted_kg)),
                Err(e) => {
                    log::error!("Failed to predict order: {}", e);
                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("ไม่สามารถทำนายผลผลิตได้").ok()));
                }
            }
        });
    };

    let handle_submit = move |_| {
        if is_submitting.get() {
            return;
        }

        let order = NewOrder {
            vegetable_id: vegetable_id.get(),
            buyer_id: buyer_id.get(),
            order_date: order_date.get(),
            due_date: due_date.get(),
            season: Some(season.get()).filter(|s| !s.is_empty()),
            details: vec![NewOrderDetail {
                farmer_id: farmer_id.get(),
                quantity_kg: quantity.get().parse().unwrap_or(0.0),
            }],
        };
        if order.vegetable_id.is_empty()
            || order.buyer_id.is_empty()
            || order.details[0].farmer_id.is_empty()
            || order.order_date.is_empty()
            || order.due_date.is_empty()
        {
            web_sys::window()
                .and_then(|w| Some(w.alert_with_message("กรุณากรอกข้อมูลให้ครบถ้วน").ok()));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            match create_order(&order).await {
                Ok(()) => {
                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("บันทึกคำสั่งปลูกเรียบร้อยแล้ว").ok()));
                    set_vegetable_id.set(String::new());
                    set_buyer_id.set(String::new());
                    set_farmer_id.set(String::new());
                    set_quantity.set(String::new());
                    set_order_date.set(String::new());
                    set_due_date.set(String::new());
                    set_season.set(String::new());
                    set_predicted.set(None);
                    set_top_vegetables.set(Vec::new());
                }
                Err(e) => {
                    log::error!("Failed to create order: {}", e);
                    web_sys::window()
                        .and_then(|w| Some(w.alert_with_message("ไม่สามารถบันทึกคำสั่งปลูกได้").ok()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field_style = "width: 100%; padding: 8px 10px; border: 1px solid #ccc; border-radius: 6px; font-size: 14px; background: white;";
    let label_style = "display: block; margin-bottom: 4px; font-size: 14px; color: #333;";

    view! {
        <div style="padding: 12px; max-width: 640px;">
            <div style="font-size: 20px; margin-bottom: 14px;">"สั่งปลูก"</div>

            <div style="background: white; border: 1px solid #ddd; border-radius: 8px; padding: 18px; display: flex; flex-direction: column; gap: 12px;">
                <div>
                    <label style=label_style>"ลูกสวน"</label>
                    <select
                        style=field_style
                        on:change=move |ev| handle_farmer_change(event_target_value(&ev))
                    >
                        <option value="" selected=move || farmer_id.get().is_empty()>"เลือกลูกสวน"</option>
                        {move || {
                            farmers
                                .get()
                                .into_iter()
                                .map(|farmer| {
                                    let id = farmer.id.clone();
                                    let id_for_selected = farmer.id.clone();
                                    view! {
                                        <option
                                            value=id
                                            selected=move || farmer_id.get() == id_for_selected
                                        >
                                            {farmer.full_name()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                {move || {
                    let top = top_vegetables.get();
                    if top.is_empty() {
                        view! { <></> }.into_any()
                    } else {
                        view! {
                            <div style="background: #e8f5e9; border: 1px solid #a5d6a7; border-radius: 6px; padding: 10px; font-size: 13px;">
                                <div style="font-weight: 600; margin-bottom: 4px;">"ผักที่ปลูกได้ผลดีของลูกสวนรายนี้"</div>
                                {top
                                    .into_iter()
                                    .map(|veg| {
                                        view! {
                                            <div>{format!("{} ({} กก.)", veg.name, format_kg(veg.total_kg))}</div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}

                <div>
                    <label style=label_style>"ผัก"</label>
                    <select
                        style=field_style
                        on:change=move |ev| {
                            set_vegetable_id.set(event_target_value(&ev));
                            set_predicted.set(None);
                        }
                    >
                        <option value="" selected=move || vegetable_id.get().is_empty()>"เลือกผัก"</option>
                        {move || {
                            vegetables
                                .get()
                                .into_iter()
                                .map(|vegetable| {
                                    let id = vegetable.id.clone();
                                    let id_for_selected = vegetable.id.clone();
                                    view! {
                                        <option
                                            value=id
                                            selected=move || vegetable_id.get() == id_for_selected
                                        >
                                            {vegetable.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label style=label_style>"ผู้รับซื้อ"</label>
                    <select
                        style=field_style
                        on:change=move |ev| set_buyer_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || buyer_id.get().is_empty()>"เลือกผู้รับซื้อ"</option>
                        {move || {
                            buyers
                                .get()
                                .into_iter()
                                .map(|buyer| {
                                    let id = buyer.id.clone();
                                    let id_for_selected = buyer.id.clone();
                                    view! {
                                        <option
                                            value=id
                                            selected=move || buyer_id.get() == id_for_selected
                                        >
                                            {buyer.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div style="display: flex; gap: 12px;">
                    <div style="flex: 1;">
                        <label style=label_style>"จำนวนที่สั่ง (กก.)"</label>
                        <input
                            type="number"
                            style=field_style
                            prop:value=quantity
                            on:input=move |ev| {
                                set_quantity.set(event_target_value(&ev));
                                set_predicted.set(None);
                            }
                        />
                    </div>
                    <div style="flex: 1;">
                        <label style=label_style>"ฤดูกาล"</label>
                        <input
                            type="text"
                            style=field_style
                            prop:value=season
                            on:input=move |ev| set_season.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div style="display: flex; gap: 12px;">
                    <div style="flex: 1;">
                        <label style=label_style>"วันที่สั่งปลูก"</label>
                        <input
                            type="date"
                            style=field_style
                            prop:value=order_date
                            on:input=move |ev| {
                                set_order_date.set(event_target_value(&ev));
                                set_predicted.set(None);
                            }
                        />
                    </div>
                    <div style="flex: 1;">
                        <label style=label_style>"วันที่กำหนดส่ง"</label>
                        <input
                            type="date"
                            style=field_style
                            prop:value=due_date
                            min=move || order_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div style="display: flex; align-items: center; gap: 12px;">
                    <button
                        style="padding: 9px 18px; background: #1565c0; color: white; border: none; border-radius: 6px; cursor: pointer;"
                        on:click=handle_predict
                    >
                        "ทำนายผลผลิต"
                    </button>
                    {move || {
                        if let Some(value) = predicted.get() {
                            view! {
                                <span style="font-size: 14px; color: #1565c0;">
                                    {format!("ผลผลิตที่คาดว่าจะได้: {} กก.", format_kg(value))}
                                </span>
                            }
                            .into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>

                <div style="display: flex; justify-content: flex-end;">
                    <button
                        style="padding: 10px 22px; background: #2e7d32; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 15px;"
                        disabled=move || is_submitting.get()
                        on:click=handle_submit
                    >
                        {move || if is_submitting.get() { "กำลังบันทึก..." } else { "บันทึกคำสั่งปลูก" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
