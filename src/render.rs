use crate::constants::{ADDITIVE_COMPOSITE_OP, FADE_COMPOSITE_OP, STROKE_WIDTH};
use fireworks_core::{Hsla, Surface};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by the canvas 2D context.
///
/// Context calls that can fail only affect what is visible this frame, so
/// their results are dropped.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        ctx.set_line_width(STROKE_WIDTH);
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> DVec2 {
        DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn fade(&mut self, opacity: f64) {
        _ = self.ctx.set_global_composite_operation(FADE_COMPOSITE_OP);
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {:.3})", opacity.clamp(0.0, 1.0)));
        let size = self.size();
        self.ctx.fill_rect(0.0, 0.0, size.x, size.y);
    }

    fn begin_additive(&mut self) {
        _ = self.ctx.set_global_composite_operation(ADDITIVE_COMPOSITE_OP);
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, color: Hsla) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }
}
