// Hover-card placement in container space. The card prefers to sit
// above and centered on the pointer; near an edge it clamps instead of
// leaving the viewport.

use super::project::Viewport;

pub const TOOLTIP_WIDTH: f64 = 250.0;
pub const TOOLTIP_HEIGHT: f64 = 180.0;
pub const POINTER_GAP: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    /// True when the card had to pin to the top edge; the view then
    /// adds a downward arrow pointing back at the anchor.
    pub pinned: bool,
}

pub fn place_tooltip(x: f64, y: f64, viewport: Viewport) -> TooltipPlacement {
    let left = (x - TOOLTIP_WIDTH / 2.0).clamp(0.0, (viewport.width - TOOLTIP_WIDTH).max(0.0));
    let raw_top = y - TOOLTIP_HEIGHT - POINTER_GAP;
    TooltipPlacement {
        left,
        top: raw_top.max(0.0),
        pinned: raw_top < 0.0,
    }
}
