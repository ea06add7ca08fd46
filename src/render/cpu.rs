use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BannerError, BannerResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::surface::Surface;

/// Flattening tolerance for circle outlines, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.05;

/// CPU backend: fills every element as an anti-aliased circle over the background.
#[derive(Default)]
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    /// Create a backend; the render context is allocated lazily on first use.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> BannerResult<R>,
    ) -> BannerResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(elements = surface.elements().len()))]
    fn render_surface(&mut self, surface: &Surface) -> BannerResult<FrameRGBA> {
        let canvas = surface.canvas();
        if canvas.width == 0 || canvas.height == 0 {
            return Err(BannerError::validation(
                "surface canvas width/height must be non-zero",
            ));
        }
        let width: u16 = canvas.width.try_into().map_err(|_| {
            BannerError::render(format!("canvas width {} exceeds u16", canvas.width))
        })?;
        let height: u16 = canvas.height.try_into().map_err(|_| {
            BannerError::render(format!("canvas height {} exceeds u16", canvas.height))
        })?;

        self.with_ctx_mut(width, height, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(to_cpu_color(surface.background()));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));

            for el in surface.elements() {
                let circle = vello_cpu::kurbo::Circle::new(
                    vello_cpu::kurbo::Point::new(el.center.x, el.center.y),
                    el.radius,
                );
                ctx.set_paint(to_cpu_color(el.fill));
                ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
            }

            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);

            Ok(FrameRGBA {
                width: canvas.width,
                height: canvas.height,
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            })
        })
    }
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
