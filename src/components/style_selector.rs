use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::model::MapStyle;

#[derive(Properties, PartialEq, Clone)]
pub struct StyleSelectorProps {
    pub value: MapStyle,
    pub on_change: Callback<MapStyle>,
}

/// Dropdown for switching the base-map style, floated over the
/// top-left corner of the map.
#[function_component(StyleSelector)]
pub fn style_selector(props: &StyleSelectorProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(style) = MapStyle::from_str(&select.value()) {
                    cb.emit(style);
                }
            }
        })
    };
    html! {
        <select
            onchange={onchange}
            style="position:absolute; top:16px; left:16px; z-index:10; background:#1e293b; color:white; border:1px solid rgba(59, 130, 246, 0.5); border-radius:8px; padding:8px 12px; cursor:pointer;"
        >
            { for MapStyle::ALL.iter().map(|style| html! {
                <option value={style.as_str()} selected={*style == props.value}>
                    { style.label() }
                </option>
            }) }
        </select>
    }
}
