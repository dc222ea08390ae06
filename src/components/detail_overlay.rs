use yew::prelude::*;

use crate::model::Tourist;
use crate::util::format_latlng;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailOverlayProps {
    /// The selected tourist, or `None` when nothing is selected.
    pub tourist: Option<Tourist>,
    pub on_close: Callback<()>,
}

/// Modal detail card shown for the selected tourist. Closes via the
/// header button; Escape handling lives with the map controller.
#[function_component(DetailOverlay)]
pub fn detail_overlay(props: &DetailOverlayProps) -> Html {
    let tourist = match &props.tourist {
        Some(t) => t.clone(),
        None => return html! {},
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let zone_style = format!(
        "color:{}; text-transform:capitalize;",
        tourist.zone_type.color()
    );
    let status_style = format!(
        "color:{};",
        if tourist.status.is_active() {
            "#22c55e"
        } else {
            "#ef4444"
        }
    );
    let location = tourist
        .location
        .map(|loc| format_latlng(loc.lat, loc.lng))
        .unwrap_or_else(|| "unknown".to_string());

    html! {
        <>
            <div style="position:absolute; inset:0; background:rgba(0, 0, 0, 0.2); backdrop-filter:blur(4px); z-index:20;"></div>
            <div style="position:absolute; left:50%; top:50%; transform:translate(-50%, -50%); background:rgba(15, 23, 42, 0.95); border:1px solid rgba(59, 130, 246, 0.3); border-radius:12px; padding:24px; width:90%; max-width:448px; z-index:30; color:white;">
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:16px;">
                    <h3 style="margin:0; font-size:18px;">{ tourist.name.clone() }</h3>
                    <button
                        onclick={close_cb}
                        style="background:none; border:none; color:#94a3b8; font-size:18px; cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                </div>
                <div style="display:flex; flex-direction:column; gap:8px; font-size:14px;">
                    <div><strong>{ "Nationality: " }</strong>{ tourist.nationality.clone() }</div>
                    <div><strong>{ "Hotel: " }</strong>{ tourist.hotel_name.clone() }</div>
                    <div><strong>{ "Safety Score: " }</strong>{ format!("{}/100", tourist.safety_score) }</div>
                    <div><strong>{ "Zone: " }</strong><span style={zone_style}>{ tourist.zone_type.label() }</span></div>
                    <div><strong>{ "Status: " }</strong><span style={status_style}>{ tourist.status.label() }</span></div>
                    <div><strong>{ "Location: " }</strong>{ location }</div>
                    <div><strong>{ "Itinerary: " }</strong>{ tourist.itinerary.clone() }</div>
                </div>
                <div style="display:flex; gap:8px; margin-top:16px;">
                    <button style="flex:1; background:#2563eb; color:white; border:none; border-radius:8px; padding:8px 12px; cursor:pointer;">
                        { "View Details" }
                    </button>
                    <button style="flex:1; background:#16a34a; color:white; border:none; border-radius:8px; padding:8px 12px; cursor:pointer;">
                        { "Contact" }
                    </button>
                </div>
            </div>
        </>
    }
}
