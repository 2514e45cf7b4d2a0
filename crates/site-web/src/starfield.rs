use crate::dom;
use site_core::{Starfield, StarfieldConfig, StarSprite};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Which box the canvas backing size tracks.
#[derive(Clone, Copy, Debug)]
pub enum SurfaceSizing {
    /// Full viewport (the page-wide background).
    Window,
    /// The canvas's parent element (the hero section).
    Parent,
}

/// One canvas with its own particle pool. A page can run several layers;
/// each draws independently inside the shared frame tick.
pub struct StarfieldLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Starfield,
    sizing: SurfaceSizing,
}

impl StarfieldLayer {
    /// Attach to `canvas_id` if the host page has it. A missing canvas or
    /// an unavailable 2D context means this layer never starts.
    pub fn mount(
        document: &web::Document,
        canvas_id: &str,
        config: StarfieldConfig,
        sizing: SurfaceSizing,
        seed: u64,
    ) -> Option<Self> {
        let canvas = document
            .get_element_by_id(canvas_id)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;

        let (w, h) = measure(&canvas, sizing);
        canvas.set_width(w.max(1.0) as u32);
        canvas.set_height(h.max(1.0) as u32);

        log::info!("[starfield] #{canvas_id} {}x{}", w as u32, h as u32);
        Some(Self {
            field: Starfield::new(config, w, h, seed),
            canvas,
            ctx,
            sizing,
        })
    }

    /// Re-measure the surface and rebuild the pool for the new dimensions.
    pub fn handle_resize(&mut self) {
        let (w, h) = measure(&self.canvas, self.sizing);
        self.canvas.set_width(w.max(1.0) as u32);
        self.canvas.set_height(h.max(1.0) as u32);
        self.field.resize(w, h);
    }

    /// Advance the simulation one step and rasterize it: opaque black
    /// clear, then trail strokes and dot fills.
    pub fn draw_frame(&mut self, scratch: &mut Vec<StarSprite>) {
        self.field.advance(scratch);

        let (w, h) = self.field.surface_size();
        self.ctx.set_fill_style_str("#000000");
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        for sprite in scratch.iter() {
            if let Some(trail) = sprite.trail {
                self.ctx.set_stroke_style_str(&white_rgba(trail.opacity));
                self.ctx.set_line_width(trail.width.max(0.1) as f64);
                self.ctx.begin_path();
                self.ctx.move_to(trail.from.x as f64, trail.from.y as f64);
                self.ctx.line_to(sprite.pos.x as f64, sprite.pos.y as f64);
                self.ctx.stroke();
            }

            self.ctx.set_fill_style_str(&white_rgba(sprite.opacity));
            self.ctx.begin_path();
            _ = self.ctx.arc(
                sprite.pos.x as f64,
                sprite.pos.y as f64,
                sprite.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
    }
}

fn measure(canvas: &web::HtmlCanvasElement, sizing: SurfaceSizing) -> (f32, f32) {
    match sizing {
        SurfaceSizing::Window => dom::window_size(),
        SurfaceSizing::Parent => match canvas.parent_element() {
            Some(parent) => (parent.client_width() as f32, parent.client_height() as f32),
            None => dom::window_size(),
        },
    }
}

fn white_rgba(opacity: f32) -> String {
    format!("rgba(255, 255, 255, {:.3})", opacity.clamp(0.0, 1.0))
}
