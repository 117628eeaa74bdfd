//! Shipment list shown on the profile page.

use leptos::prelude::*;

use crate::net::types::Shipment;
use crate::util::format::{format_date, item_count_label, shipment_status_class, shipment_status_label};

/// Table of past shipments with an expandable item list per row.
#[component]
pub fn ShipmentHistory(shipments: Vec<Shipment>) -> impl IntoView {
    let expanded = RwSignal::new(None::<i64>);

    if shipments.is_empty() {
        return view! {
            <p class="shipments__empty">"No shipments yet. Your first box ships after the next billing date."</p>
        }
        .into_any();
    }

    let rows = shipments
        .into_iter()
        .map(|shipment| {
            let id = shipment.id;
            let created = format_date(Some(&shipment.created_at));
            let badge = format!("badge {}", shipment_status_class(&shipment.status));
            let status = shipment_status_label(&shipment.status);
            let count = item_count_label(shipment.item_count());
            let tracking = shipment.tracking_number.clone().unwrap_or_else(|| "N/A".to_owned());
            let shipped = format_date(shipment.shipped_date.as_deref());
            let estimated = format_date(shipment.estimated_delivery_date.as_deref());
            let delivered = format_date(shipment.delivered_date.as_deref());
            let items = shipment
                .shipment_items
                .iter()
                .map(|item| {
                    let name = item
                        .design
                        .as_ref()
                        .map_or_else(|| format!("Design #{}", item.design_id), |d| d.name.clone());
                    view! { <li>{format!("{name} × {}", item.quantity)}</li> }
                })
                .collect::<Vec<_>>();
            view! {
                <li class="shipments__row">
                    <button
                        class="shipments__summary"
                        on:click=move |_| expanded.update(|e| *e = if *e == Some(id) { None } else { Some(id) })
                    >
                        <span class="shipments__date">{created}</span>
                        <span class=badge>{status}</span>
                        <span class="shipments__count">{count}</span>
                    </button>
                    <Show when=move || expanded.get() == Some(id)>
                        <div class="shipments__detail">
                            <p>"Tracking: " {tracking.clone()}</p>
                            <p>"Shipped: " {shipped.clone()}</p>
                            <p>"Estimated delivery: " {estimated.clone()}</p>
                            <p>"Delivered: " {delivered.clone()}</p>
                        </div>
                    </Show>
                    <ul class="shipments__items" class:shipments__items--open=move || expanded.get() == Some(id)>
                        {items}
                    </ul>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! { <ul class="shipments">{rows}</ul> }.into_any()
}
