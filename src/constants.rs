/// Browser-side constants for the canvas front-end.
///
/// Simulation tuning lives in `fireworks_core::constants`; this file only
/// holds what the DOM, the 2D context and the frame driver need.
// Id of the full-viewport canvas the show is painted on
pub const CANVAS_ID: &str = "fireworksCanvas";

// Compositing operations for the two paint phases
pub const FADE_COMPOSITE_OP: &str = "destination-out"; // erase towards transparent
pub const ADDITIVE_COMPOSITE_OP: &str = "lighter"; // overlapping strokes brighten

// Stroke width in CSS pixels
pub const STROKE_WIDTH: f64 = 1.0;

// Size reported before the first layout pass
pub const FALLBACK_WIDTH: f64 = 800.0;
pub const FALLBACK_HEIGHT: f64 = 600.0;

// Seconds between frame statistics log lines
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;
