use yew::prelude::*;

use crate::scene::layers::LEGEND_ITEMS;

/// In-scene legend panel, rendered as part of the SVG so it sits above
/// every map layer. Anchored to the top-right corner of the viewport.
#[derive(Properties, PartialEq, Clone)]
pub struct LegendProps {
    pub width: f64,
}

#[function_component(Legend)]
pub fn legend(props: &LegendProps) -> Html {
    let w = props.width;
    html! {
        <g>
            <rect
                x={(w - 160.0).to_string()}
                y="10"
                width="150"
                height="120"
                rx="8"
                fill="rgba(15, 23, 42, 0.9)"
                stroke="rgba(59, 130, 246, 0.3)"
                stroke-width="1"
            />
            <text
                x={(w - 85.0).to_string()}
                y="30"
                text-anchor="middle"
                fill="white"
                font-size="12"
                font-weight="bold"
            >
                { "Legend" }
            </text>
            { for LEGEND_ITEMS.iter().enumerate().map(|(i, item)| {
                let cy = 50.0 + 20.0 * i as f64;
                html! {
                    <g key={item.label}>
                        <circle
                            cx={(w - 140.0).to_string()}
                            cy={cy.to_string()}
                            r="6"
                            fill={item.color}
                        />
                        <text
                            x={(w - 125.0).to_string()}
                            y={(cy + 4.0).to_string()}
                            fill="white"
                            font-size="10"
                        >
                            { item.label }
                        </text>
                    </g>
                }
            }) }
        </g>
    }
}
