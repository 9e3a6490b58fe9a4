//! Pure time-to-pixel mapping for the timeline.
//!
//! Every component that draws time-positioned geometry (ruler ticks, clip
//! blocks, the overall strip width) goes through these functions so the
//! mapping stays consistent across the panel.

/// Seconds covered by the timeline regardless of content.
pub const TOTAL_DURATION_SECONDS: f64 = 60.0;

/// Zoom slider bounds and default.
pub const ZOOM_MIN: i32 = 10;
pub const ZOOM_MAX: i32 = 100;
pub const ZOOM_DEFAULT: i32 = 50;

/// Horizontal placement of a clip block, in pixels from the strip origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipGeometry {
    pub left: f64,
    pub width: f64,
}

/// Clamp a requested zoom value into the slider range.
pub fn clamp_zoom(zoom: i32) -> i32 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Pixels per second at a given zoom level. Linear: zoom 10 gives 12 px/s,
/// zoom 100 gives 30 px/s.
pub fn time_scale(zoom: i32) -> f64 {
    10.0 + zoom as f64 / 5.0
}

/// Total width of the scrollable strip in pixels.
pub fn timeline_width(duration: f64, scale: f64) -> f64 {
    duration * scale
}

/// Position and width of a clip block at the given scale.
pub fn clip_geometry(start: f64, end: f64, scale: f64) -> ClipGeometry {
    ClipGeometry {
        left: start * scale,
        width: (end - start) * scale,
    }
}

/// Format a second count as an `M:SS` ruler label.
pub fn format_time(seconds: f64) -> String {
    let whole = seconds.floor() as i64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_scale_bounds() {
        assert_eq!(time_scale(ZOOM_MIN), 12.0);
        assert_eq!(time_scale(ZOOM_MAX), 30.0);
        assert_eq!(time_scale(ZOOM_DEFAULT), 20.0);
    }

    #[test]
    fn test_timeline_width_at_min_zoom() {
        let scale = time_scale(10);
        assert_eq!(timeline_width(TOTAL_DURATION_SECONDS, scale), 720.0);
    }

    #[test]
    fn test_clip_geometry_matches_scale() {
        let scale = 15.0;
        assert_eq!(
            clip_geometry(0.0, 15.0, scale),
            ClipGeometry { left: 0.0, width: 225.0 }
        );
        assert_eq!(
            clip_geometry(15.0, 25.0, scale),
            ClipGeometry { left: 225.0, width: 150.0 }
        );
    }

    #[test]
    fn test_adjacent_clips_tile_exactly() {
        // A clip ending where the next begins leaves no gap at any zoom.
        for zoom in [ZOOM_MIN, ZOOM_DEFAULT, ZOOM_MAX] {
            let scale = time_scale(zoom);
            let first = clip_geometry(0.0, 15.0, scale);
            let second = clip_geometry(15.0, 25.0, scale);
            assert_eq!(first.left + first.width, second.left);
        }
    }

    #[test]
    fn test_recomputed_geometry_is_identical() {
        // Pure functions: same inputs give the same output on every call.
        assert_eq!(time_scale(37), time_scale(37));
        let scale = time_scale(37);
        assert_eq!(clip_geometry(3.0, 9.5, scale), clip_geometry(3.0, 9.5, scale));
        assert_eq!(
            timeline_width(TOTAL_DURATION_SECONDS, scale),
            timeline_width(TOTAL_DURATION_SECONDS, scale)
        );
        assert_eq!(format_time(42.0), format_time(42.0));
    }

    #[test]
    fn test_inverted_range_has_negative_width() {
        let geometry = clip_geometry(20.0, 10.0, 20.0);
        assert!(geometry.width < 0.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(75.9), "1:15");
    }

    #[test]
    fn test_clamp_zoom() {
        assert_eq!(clamp_zoom(5), ZOOM_MIN);
        assert_eq!(clamp_zoom(250), ZOOM_MAX);
        assert_eq!(clamp_zoom(42), 42);
    }
}
