// Marker synthesis: one visual anchor per tourist with a usable
// position fix. Hover growth and the pulsing halo are applied at
// render time; this module only decides placement and color.

use super::project::{project, Viewport};
use crate::model::Tourist;
use crate::util::clog;

pub const MARKER_RING_R: f64 = 12.0;
pub const MARKER_DISC_R: f64 = 8.0;
pub const MARKER_HOVER_GROW: f64 = 2.0;
pub const MARKER_SHADOW_OFFSET: f64 = 2.0;
pub const HALO_MAX_R: f64 = 25.0;
pub const HALO_PERIOD: &str = "3s";
pub const MARKER_ICON: &str = "👤";

/// A placed marker, ready for the render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

/// Projects every mappable tourist into viewport space, preserving feed
/// order. Entities without a finite position fix are skipped, never a
/// render failure.
pub fn build_markers(tourists: &[Tourist], viewport: Viewport) -> Vec<MarkerSpec> {
    tourists
        .iter()
        .filter_map(|t| {
            let loc = match t.location {
                Some(loc) if loc.is_finite() => loc,
                _ => {
                    clog(&format!("skipping unmappable tourist {}", t.id));
                    return None;
                }
            };
            let (x, y) = project(loc, viewport);
            Some(MarkerSpec {
                id: t.id.clone(),
                x,
                y,
                color: t.zone_type.color(),
            })
        })
        .collect()
}
