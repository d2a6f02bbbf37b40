use crate::camera::WebCapture;
use anyhow::{anyhow, Result as AnyhowResult};
use leptos::{logging::*, prelude::*};
use posecam::{image::Rgba, Canvas, Color, Error, Point, Result, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

type CanvasRef = NodeRef<leptos::html::Canvas>;

/// The output `<canvas>`, drawn through its 2d context.
pub struct CanvasSurface {
    canvas: CanvasRef,
    ctx: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
}

impl CanvasSurface {
    pub fn new(canvas: CanvasRef) -> Self {
        Self { canvas, ctx: None }
    }

    fn context(&mut self) -> Option<&(HtmlCanvasElement, CanvasRenderingContext2d)> {
        if self.ctx.is_none() {
            match get_canvas_ctx(self.canvas) {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => error!("canvas unavailable: {:?}", e),
            }
        }
        self.ctx.as_ref()
    }
}

fn get_canvas_ctx(canvas: CanvasRef) -> AnyhowResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = canvas
        .get_untracked()
        .ok_or_else(|| anyhow!("ref has no canvas"))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("failed to get canvas ctx: {:?}", e))?
        .ok_or_else(|| anyhow!("no canvas ctx"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("canvas ctx dyn cast failed: {:?}", e))?;

    Ok((canvas, ctx))
}

pub fn css_color(color: Color) -> String {
    let Rgba([r, g, b, a]) = color;
    format!("rgba({r}, {g}, {b}, {})", a as f32 / 255.)
}

impl Surface for CanvasSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let Some((_, ctx)) = self.context() else {
            return;
        };
        ctx.begin_path();
        if let Err(e) = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0., TAU) {
            error!("arc: {:?}", e);
            return;
        }
        ctx.set_fill_style_str(&css_color(color));
        ctx.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let Some((_, ctx)) = self.context() else {
            return;
        };
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&css_color(color));
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }
}

impl Canvas<WebCapture> for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if let Some((canvas, _)) = self.context() {
            canvas.set_width(width);
            canvas.set_height(height);
        }
    }

    fn clear(&mut self) {
        if let Some((canvas, ctx)) = self.context() {
            ctx.clear_rect(0., 0., canvas.width() as f64, canvas.height() as f64);
        }
    }

    fn draw_frame(&mut self, frame: &WebCapture) -> Result<()> {
        let (canvas, ctx) = self
            .context()
            .ok_or_else(|| Error::Render("canvas is not mounted".to_string()))?;

        ctx.draw_image_with_html_video_element_and_dw_and_dh(
            frame.video(),
            0.,
            0.,
            canvas.width() as f64,
            canvas.height() as f64,
        )
        .map_err(|e| Error::Render(format!("draw image: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posecam::skeleton::{MARKER_COLOR, SKELETON_COLOR};

    #[test]
    fn css_colors() {
        assert_eq!(css_color(MARKER_COLOR), "rgba(255, 0, 0, 1)");
        assert_eq!(css_color(SKELETON_COLOR), "rgba(0, 0, 255, 1)");
        assert_eq!(css_color(Rgba([10, 20, 30, 0])), "rgba(10, 20, 30, 0)");
    }
}
