// Geographic coordinates to viewport pixels.

use crate::model::GeoPoint;

/// Nominal center of the monitored region (Guwahati).
pub const CENTER_LAT: f64 = 26.1445;
pub const CENTER_LNG: f64 = 91.7362;

/// Linear scale in pixels per degree.
pub const SCALE: f64 = 8000.0;

/// Markers never render outside or flush against the container edge.
pub const EDGE_MARGIN: f64 = 30.0;

/// Pixel size of the drawable region, re-measured from the container on
/// every render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A container that cannot fit the edge margin on both axes gets an
    /// empty scene instead of a degenerate one.
    pub fn is_usable(&self) -> bool {
        self.width > 2.0 * EDGE_MARGIN && self.height > 2.0 * EDGE_MARGIN
    }
}

/// Maps a position to viewport pixels: linear offset from the region
/// center, latitude inverted (north is up), clamped to the margin box.
/// Callers filter non-finite coordinates before projecting.
pub fn project(loc: GeoPoint, viewport: Viewport) -> (f64, f64) {
    let x = viewport.width / 2.0 + (loc.lng - CENTER_LNG) * SCALE;
    let y = viewport.height / 2.0 - (loc.lat - CENTER_LAT) * SCALE;
    (clamp_axis(x, viewport.width), clamp_axis(y, viewport.height))
}

// The upper bound must never drop below the lower one, or `clamp` panics;
// on a dimension smaller than twice the margin the window collapses to the
// margin instead.
fn clamp_axis(v: f64, dim: f64) -> f64 {
    let hi = (dim - EDGE_MARGIN).max(EDGE_MARGIN);
    v.clamp(EDGE_MARGIN, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(800.0, 500.0)
    }

    #[test]
    fn center_maps_to_viewport_center() {
        let (x, y) = project(
            GeoPoint {
                lat: CENTER_LAT,
                lng: CENTER_LNG,
            },
            vp(),
        );
        assert_eq!((x, y), (400.0, 250.0));
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let (x0, y0) = project(
            GeoPoint {
                lat: CENTER_LAT,
                lng: CENTER_LNG,
            },
            vp(),
        );
        let (x_east, _) = project(
            GeoPoint {
                lat: CENTER_LAT,
                lng: CENTER_LNG + 0.005,
            },
            vp(),
        );
        let (_, y_north) = project(
            GeoPoint {
                lat: CENTER_LAT + 0.005,
                lng: CENTER_LNG,
            },
            vp(),
        );
        assert!(x_east > x0);
        assert!(y_north < y0);
    }

    #[test]
    fn scale_is_linear_in_degrees() {
        let (x, y) = project(
            GeoPoint {
                lat: CENTER_LAT + 0.002,
                lng: CENTER_LNG + 0.001,
            },
            vp(),
        );
        assert!((x - 408.0).abs() < 1e-9);
        assert!((y - 234.0).abs() < 1e-9);
    }

    #[test]
    fn output_stays_inside_margin_box_across_the_region() {
        let viewport = vp();
        let mut lat = 24.0;
        while lat <= 29.0 {
            let mut lng = 89.0;
            while lng <= 95.0 {
                let (x, y) = project(GeoPoint { lat, lng }, viewport);
                assert!((EDGE_MARGIN..=viewport.width - EDGE_MARGIN).contains(&x));
                assert!((EDGE_MARGIN..=viewport.height - EDGE_MARGIN).contains(&y));
                lng += 0.25;
            }
            lat += 0.25;
        }
    }

    #[test]
    fn far_outliers_clamp_to_the_margin() {
        let viewport = vp();
        let (x, y) = project(
            GeoPoint {
                lat: -90.0,
                lng: 180.0,
            },
            viewport,
        );
        assert_eq!(x, viewport.width - EDGE_MARGIN);
        assert_eq!(y, viewport.height - EDGE_MARGIN);
        let (x, y) = project(
            GeoPoint {
                lat: 90.0,
                lng: -180.0,
            },
            viewport,
        );
        assert_eq!(x, EDGE_MARGIN);
        assert_eq!(y, EDGE_MARGIN);
    }

    #[test]
    fn degenerate_viewport_collapses_instead_of_panicking() {
        let tiny = Viewport::new(40.0, 20.0);
        assert!(!tiny.is_usable());
        let (x, y) = project(
            GeoPoint {
                lat: CENTER_LAT,
                lng: CENTER_LNG,
            },
            tiny,
        );
        assert_eq!((x, y), (EDGE_MARGIN, EDGE_MARGIN));
    }
}
