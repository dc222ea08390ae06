use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::{
    detail_overlay::DetailOverlay, legend::Legend, style_selector::StyleSelector, tooltip::Tooltip,
};
use crate::model::{MapAction, MapState, MapStyle, Tourist};
use crate::scene::layers::{
    zone_fill, zone_stroke, BYWAY_DASH, BYWAY_STROKE, BYWAY_WIDTH, CONTOUR_LOWER,
    CONTOUR_LOWER_STROKE, CONTOUR_UPPER, CONTOUR_UPPER_STROKE, GROVE_FILL, GROVE_STROKE,
    HIGHWAY_STROKE, HIGHWAY_WIDTH, HILL_FILL, HILL_STROKE, RIVER_OPACITY, RIVER_WIDTH,
    TERRAIN_BASE_FILL, TERRAIN_TILE, WATER_GRAD_FROM, WATER_GRAD_TO, ZONE_DASH, ZONE_WIDTH,
};
use crate::scene::markers::{
    HALO_MAX_R, HALO_PERIOD, MARKER_DISC_R, MARKER_HOVER_GROW, MARKER_ICON, MARKER_RING_R,
    MARKER_SHADOW_OFFSET,
};
use crate::scene::{build_markers, build_scene, place_tooltip, Viewport};

const STYLE_KEY: &str = "tsm_map_style";

fn load_style() -> MapStyle {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(STYLE_KEY) {
                if let Some(style) = MapStyle::from_str(&raw) {
                    return style;
                }
            }
        }
    }
    MapStyle::default()
}

fn save_style(style: MapStyle) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.set_item(STYLE_KEY, style.as_str());
        }
    }
}

/// Pointer position in container space, so tooltip placement is
/// unaffected by where the map sits on the page.
fn container_point(container: &NodeRef, event: &MouseEvent) -> (f64, f64) {
    if let Some(el) = container.cast::<web_sys::Element>() {
        let rect = el.get_bounding_client_rect();
        (
            event.client_x() as f64 - rect.left(),
            event.client_y() as f64 - rect.top(),
        )
    } else {
        (event.client_x() as f64, event.client_y() as f64)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub tourists: Vec<Tourist>,
    /// Fires with `Some(id)` on selection and `None` when it clears.
    #[prop_or_default]
    pub on_select: Callback<Option<String>>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let viewport = use_state(|| Viewport::new(0.0, 0.0));
    let state = use_reducer(|| MapState::new(load_style(), js_sys::Math::random().to_bits()));

    // Measure on mount, re-measure on window resize, close on Escape.
    {
        let container_ref = container_ref.clone();
        let viewport = viewport.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let measure = {
                let container_ref = container_ref.clone();
                let viewport = viewport.clone();
                move || {
                    if let Some(el) = container_ref.cast::<web_sys::Element>() {
                        let rect = el.get_bounding_client_rect();
                        viewport.set(Viewport::new(rect.width(), rect.height()));
                    }
                }
            };
            measure();
            let resize_cb = {
                let measure = measure.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    measure();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();
            let keydown_cb = {
                let state = state.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        state.dispatch(MapAction::ClearSelection);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&resize_cb, &keydown_cb);
            }
        });
    }

    // Persist the chosen style.
    {
        let style = state.style;
        use_effect_with(style, move |style| {
            save_style(*style);
            || ()
        });
    }

    // A replaced feed invalidates hover and selection along with the
    // marker subtree they pointed into.
    {
        let state = state.clone();
        use_effect_with(props.tourists.clone(), move |_| {
            state.dispatch(MapAction::DataChanged);
            || ()
        });
    }

    // Report selection changes to the host.
    {
        let on_select = props.on_select.clone();
        use_effect_with(state.selected_id.clone(), move |selected: &Option<String>| {
            on_select.emit(selected.clone());
            || ()
        });
    }

    let vp = *viewport;
    let scene = build_scene(state.style, vp, state.relief_seed);
    let markers = if vp.is_usable() {
        build_markers(&props.tourists, vp)
    } else {
        Vec::new()
    };
    let hovered_id = state.hovered.as_ref().map(|h| h.tourist_id.clone());

    let on_style_change = {
        let state = state.clone();
        Callback::from(move |style: MapStyle| state.dispatch(MapAction::SetStyle(style)))
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(MapAction::ClearSelection))
    };

    let tooltip = state
        .hovered
        .as_ref()
        .and_then(|h| {
            props.tourists.iter().find(|t| t.id == h.tourist_id).map(|t| {
                let placement = place_tooltip(h.x, h.y, vp);
                html! { <Tooltip tourist={t.clone()} placement={placement} /> }
            })
        })
        .unwrap_or_else(|| html! {});

    let selected = state
        .selected_id
        .as_ref()
        .and_then(|id| props.tourists.iter().find(|t| &t.id == id).cloned());

    let svg_style = format!("display:block; background:{};", scene.background);
    let map = if vp.is_usable() {
        html! {
            <svg width="100%" height="100%" style={svg_style}>
                <defs>
                    <pattern
                        id="terrain-texture"
                        width={TERRAIN_TILE.to_string()}
                        height={TERRAIN_TILE.to_string()}
                        patternUnits="userSpaceOnUse"
                    >
                        <rect
                            width={TERRAIN_TILE.to_string()}
                            height={TERRAIN_TILE.to_string()}
                            fill={TERRAIN_BASE_FILL}
                        />
                        <path d={CONTOUR_UPPER} stroke={CONTOUR_UPPER_STROKE} stroke-width="1" fill="none" />
                        <path d={CONTOUR_LOWER} stroke={CONTOUR_LOWER_STROKE} stroke-width="1" fill="none" />
                    </pattern>
                    <linearGradient id="water-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color={WATER_GRAD_FROM} stop-opacity="0.8" />
                        <stop offset="100%" stop-color={WATER_GRAD_TO} stop-opacity="0.6" />
                    </linearGradient>
                </defs>
                <rect width="100%" height="100%" fill="url(#terrain-texture)" />
                { for scene.hills.iter().map(|hill| html! {
                    <path d={hill.path()} fill={HILL_FILL} stroke={HILL_STROKE} stroke-width="1" />
                }) }
                { for scene.groves.iter().map(|grove| html! {
                    <circle
                        cx={grove.cx.to_string()}
                        cy={grove.cy.to_string()}
                        r={grove.r.to_string()}
                        fill={GROVE_FILL}
                        stroke={GROVE_STROKE}
                        stroke-width="1"
                    />
                }) }
                <path
                    d={scene.river.clone()}
                    fill="none"
                    stroke="url(#water-gradient)"
                    stroke-width={RIVER_WIDTH.to_string()}
                    opacity={RIVER_OPACITY.to_string()}
                />
                <path
                    d={scene.highway.clone()}
                    fill="none"
                    stroke={HIGHWAY_STROKE}
                    stroke-width={HIGHWAY_WIDTH.to_string()}
                />
                { for scene.byways.iter().map(|byway| html! {
                    <path
                        d={byway.clone()}
                        fill="none"
                        stroke={BYWAY_STROKE}
                        stroke-width={BYWAY_WIDTH.to_string()}
                        stroke-dasharray={BYWAY_DASH}
                    />
                }) }
                { for scene.zones.iter().map(|zone| html! {
                    <circle
                        cx={zone.cx.to_string()}
                        cy={zone.cy.to_string()}
                        r={zone.r.to_string()}
                        fill={zone_fill(zone.kind)}
                        stroke={zone_stroke(zone.kind)}
                        stroke-width={ZONE_WIDTH.to_string()}
                        stroke-dasharray={ZONE_DASH}
                    />
                }) }
                { for markers.iter().map(|marker| {
                    let hovered = hovered_id.as_deref() == Some(marker.id.as_str());
                    let ring_r = if hovered { MARKER_RING_R + MARKER_HOVER_GROW } else { MARKER_RING_R };
                    let disc_r = if hovered { MARKER_DISC_R + MARKER_HOVER_GROW } else { MARKER_DISC_R };
                    let onmouseenter = {
                        let state = state.clone();
                        let container_ref = container_ref.clone();
                        let id = marker.id.clone();
                        Callback::from(move |e: MouseEvent| {
                            let (x, y) = container_point(&container_ref, &e);
                            state.dispatch(MapAction::HoverEnter { id: id.clone(), x, y });
                        })
                    };
                    let onmouseleave = {
                        let state = state.clone();
                        let id = marker.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            state.dispatch(MapAction::HoverLeave { id: id.clone() });
                        })
                    };
                    let onclick = {
                        let state = state.clone();
                        let id = marker.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            state.dispatch(MapAction::Select { id: id.clone() });
                        })
                    };
                    html! {
                        <g
                            key={marker.id.clone()}
                            style="cursor:pointer;"
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                            onclick={onclick}
                        >
                            <circle
                                cx={(marker.x + MARKER_SHADOW_OFFSET).to_string()}
                                cy={(marker.y + MARKER_SHADOW_OFFSET).to_string()}
                                r={MARKER_RING_R.to_string()}
                                fill="rgba(0, 0, 0, 0.3)"
                            />
                            <circle
                                cx={marker.x.to_string()}
                                cy={marker.y.to_string()}
                                r={ring_r.to_string()}
                                fill="white"
                                opacity="0.9"
                            />
                            <circle
                                cx={marker.x.to_string()}
                                cy={marker.y.to_string()}
                                r={disc_r.to_string()}
                                fill={marker.color}
                            />
                            <text
                                x={marker.x.to_string()}
                                y={(marker.y + 4.0).to_string()}
                                text-anchor="middle"
                                font-size="10"
                                fill="white"
                                font-weight="bold"
                            >
                                { MARKER_ICON }
                            </text>
                            <circle
                                cx={marker.x.to_string()}
                                cy={marker.y.to_string()}
                                r={MARKER_RING_R.to_string()}
                                fill="none"
                                stroke={marker.color}
                                stroke-width="2"
                                opacity="0.6"
                                style="pointer-events:none;"
                            >
                                <animate
                                    attributeName="r"
                                    values={format!("{};{};{}", MARKER_RING_R, HALO_MAX_R, MARKER_RING_R)}
                                    dur={HALO_PERIOD}
                                    repeatCount="indefinite"
                                />
                                <animate
                                    attributeName="opacity"
                                    values="0.6;0;0.6"
                                    dur={HALO_PERIOD}
                                    repeatCount="indefinite"
                                />
                            </circle>
                        </g>
                    }
                }) }
                <Legend width={vp.width} />
            </svg>
        }
    } else {
        html! { <svg width="100%" height="100%" style={svg_style}></svg> }
    };

    html! {
        <div
            ref={container_ref.clone()}
            style="position:relative; width:100%; height:500px; border-radius:12px; overflow:hidden;"
        >
            { map }
            <StyleSelector value={state.style} on_change={on_style_change} />
            { tooltip }
            <DetailOverlay tourist={selected} on_close={on_close} />
        </div>
    }
}
