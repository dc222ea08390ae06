use yew::prelude::*;

use crate::model::Tourist;
use crate::scene::tooltip::TooltipPlacement;

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipProps {
    pub tourist: Tourist,
    pub placement: TooltipPlacement,
}

/// Hover card for a marker. Never intercepts pointer events, so moving
/// the cursor over the card cannot steal the hover from the marker.
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let t = &props.tourist;
    let card_style = format!(
        "position:absolute; left:{}px; top:{}px; background:rgba(15, 23, 42, 0.95); color:white; padding:16px; border-radius:12px; border:1px solid rgba(59, 130, 246, 0.3); backdrop-filter:blur(8px); font-size:14px; z-index:1000; pointer-events:none; max-width:250px; box-shadow:0 8px 32px rgba(0, 0, 0, 0.3);",
        props.placement.left, props.placement.top
    );
    let zone_style = format!(
        "color:{}; text-transform:capitalize;",
        t.zone_type.color()
    );
    let status_style = format!(
        "color:{};",
        if t.status.is_active() {
            "#22c55e"
        } else {
            "#ef4444"
        }
    );
    html! {
        <div style={card_style}>
            <div style="font-weight:600; margin-bottom:8px; color:#60a5fa;">{ t.name.clone() }</div>
            <div>{ format!("📍 {}", t.nationality) }</div>
            <div>{ format!("🏨 {}", t.hotel_name) }</div>
            <div>{ "📊 Safety Score: " }<b>{ format!("{}/100", t.safety_score) }</b></div>
            <div>{ "⚠️ Zone: " }<span style={zone_style}>{ t.zone_type.label() }</span></div>
            <div>{ "📱 Status: " }<span style={status_style}>{ t.status.label() }</span></div>
            <div style="font-size:12px; color:#94a3b8; margin-top:8px;">{ t.itinerary.clone() }</div>
            {
                if props.placement.pinned {
                    // Pinned to the top edge: the anchor point sits below
                    // the card, so point back down at it.
                    html! {
                        <div style="position:absolute; left:50%; bottom:-6px; margin-left:-6px; width:0; height:0; border-left:6px solid transparent; border-right:6px solid transparent; border-top:6px solid rgba(15, 23, 42, 0.95);"></div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
