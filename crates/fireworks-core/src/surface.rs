//! Drawing seam between the simulation and whatever paints the frame.
//!
//! A frame is painted in two phases: `fade` partially erases what was drawn
//! before (so strokes leave a fading streak), then `begin_additive` switches
//! to additive blending for the strokes of the current frame.

use glam::DVec2;

/// Colour in CSS `hsla()` terms: hue in degrees, saturation and lightness in
/// percent, alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// CSS colour string; hue is folded into `[0, 360)`.
    pub fn to_css(&self) -> String {
        format!(
            "hsla({:.2}, {:.0}%, {:.2}%, {:.3})",
            self.hue.rem_euclid(360.0),
            self.saturation,
            self.lightness,
            self.alpha.clamp(0.0, 1.0)
        )
    }
}

pub trait Surface {
    /// Current drawable size in pixels.
    fn size(&self) -> DVec2;

    /// Erase phase: wash the whole surface towards transparent by `opacity`.
    fn fade(&mut self, opacity: f64);

    /// Draw phase: subsequent strokes accumulate luminance.
    fn begin_additive(&mut self);

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, color: Hsla);
}

/// Surface used when no drawing context is available. Every draw is dropped;
/// the size comes from a callback queried each frame so the simulation still
/// follows viewport changes.
pub struct NullSurface {
    size: Box<dyn Fn() -> DVec2>,
}

impl NullSurface {
    /// A surface that always reports `size`.
    pub fn new(size: DVec2) -> Self {
        Self::tracking(move || size)
    }

    pub fn tracking(size: impl Fn() -> DVec2 + 'static) -> Self {
        Self {
            size: Box::new(size),
        }
    }
}

impl Surface for NullSurface {
    fn size(&self) -> DVec2 {
        (self.size)()
    }

    fn fade(&mut self, _opacity: f64) {}

    fn begin_additive(&mut self) {}

    fn stroke_segment(&mut self, _from: DVec2, _to: DVec2, _color: Hsla) {}
}
